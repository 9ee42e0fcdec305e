//! Demo dataset
//!
//! Five well-known NIST PQC submissions with a handful of measurement runs
//! each, loaded through the regular submission and ingest pipeline so the
//! leaderboard is built exactly as it would be in production.

use crate::service;
use pqbench_core::{
    BenchmarkMetrics, BenchmarkSubmission, Category, EnvironmentInfo, Result, SubmitAlgorithm,
};
use pqbench_storage::Database;

struct SeedAlgorithm {
    name: &'static str,
    version: &'static str,
    category: Category,
    description: &'static str,
    language: &'static str,
    source_code: &'static str,
    researcher: (&'static str, &'static str, &'static str),
    verified: bool,
}

struct SeedRun {
    algorithm: usize,
    key_gen_time: f64,
    sign_time: Option<f64>,
    verify_time: Option<f64>,
    encaps_time: Option<f64>,
    decaps_time: Option<f64>,
    peak_memory: f64,
    public_key_size: u64,
    secret_key_size: u64,
    signature_size: Option<u64>,
    ciphertext_size: Option<u64>,
}

const ALGORITHMS: [SeedAlgorithm; 5] = [
    SeedAlgorithm {
        name: "CRYSTALS-Dilithium",
        version: "3.1",
        category: Category::Lattice,
        description: "Reference implementation of CRYSTALS-Dilithium, a lattice-based digital signature scheme. This implementation focuses on security level 3 with optimized polynomial arithmetic.",
        language: "C",
        source_code: "// CRYSTALS-Dilithium reference implementation\n#include \"sign.h\"\n\nint crypto_sign_keypair(uint8_t *pk, uint8_t *sk) {\n  uint8_t seedbuf[2*SEEDBYTES + CRHBYTES];\n  randombytes(seedbuf, SEEDBYTES);\n  shake256(seedbuf, 2*SEEDBYTES + CRHBYTES, seedbuf, SEEDBYTES);\n  /* expand matrix, sample vectors, pack keys */\n  return 0;\n}\n",
        researcher: ("Alice Chen", "alice@crypto.edu", "MIT Cryptography Lab"),
        verified: true,
    },
    SeedAlgorithm {
        name: "CRYSTALS-Kyber",
        version: "1024",
        category: Category::Lattice,
        description: "Implementation of CRYSTALS-Kyber KEM at security level 5. Includes AVX2 optimizations for x86-64 platforms.",
        language: "C",
        source_code: "// CRYSTALS-Kyber reference implementation\n#include \"kem.h\"\n\nint crypto_kem_keypair(uint8_t *pk, uint8_t *sk) {\n  indcpa_keypair(pk, sk);\n  hash_h(sk + KYBER_SECRETKEYBYTES - 2*KYBER_SYMBYTES, pk, KYBER_PUBLICKEYBYTES);\n  randombytes(sk + KYBER_SECRETKEYBYTES - KYBER_SYMBYTES, KYBER_SYMBYTES);\n  return 0;\n}\n",
        researcher: ("Bob Martinez", "bob@lattice.io", "Stanford Security Research"),
        verified: true,
    },
    SeedAlgorithm {
        name: "Falcon",
        version: "512",
        category: Category::Lattice,
        description: "Fast-Fourier Lattice-based Compact Signatures over NTRU. This implementation targets the Falcon-512 parameter set.",
        language: "C",
        source_code: "// Falcon-512 implementation\n#include \"falcon.h\"\n\nint falcon_keygen(shake256_context *rng, void *privkey, void *pubkey) {\n  int8_t f[512], g[512], F[512];\n  uint16_t h[512];\n  Zf(keygen)(&inner, f, g, F, NULL, h, 9, tmp.b, rng);\n  return 0;\n}\n",
        researcher: ("Alice Chen", "alice@crypto.edu", "MIT Cryptography Lab"),
        verified: false,
    },
    SeedAlgorithm {
        name: "SPHINCS+",
        version: "SHA256-256f",
        category: Category::HashBased,
        description: "Stateless hash-based signature scheme. This variant uses SHA-256 as the underlying hash function with fast parameters.",
        language: "C",
        source_code: "// SPHINCS+ reference implementation\n#include \"wots.h\"\n#include \"fors.h\"\n\nint crypto_sign_keypair(unsigned char *pk, unsigned char *sk) {\n  unsigned char seed[CRYPTO_SEEDBYTES];\n  randombytes(seed, CRYPTO_SEEDBYTES);\n  treehash(pk + SPX_N, sk + 3*SPX_N, 0, SPX_TREE_HEIGHT, wots_gen_leaf, addr, sk, pk);\n  return 0;\n}\n",
        researcher: ("Carol Williams", "carol@pqc.org", "NIST PQC Team"),
        verified: true,
    },
    SeedAlgorithm {
        name: "Classic McEliece",
        version: "460896",
        category: Category::CodeBased,
        description: "Code-based KEM based on binary Goppa codes. Conservative security choice with very large keys but fast operations.",
        language: "C",
        source_code: "// Classic McEliece implementation\n#include \"operations.h\"\n\nint crypto_kem_keypair(unsigned char *pk, unsigned char *sk) {\n  while (pk_gen(pk, sk + SYS_N/8, sk + SYS_N/8 + IRR_BYTES) != 0)\n    randombytes(sk, SYS_N/8 + (1 << GFBITS)*sizeof(gf) + SYS_T*2 + 32);\n  return 0;\n}\n",
        researcher: ("Bob Martinez", "bob@lattice.io", "Stanford Security Research"),
        verified: false,
    },
];

const RUNS: [SeedRun; 10] = [
    SeedRun { algorithm: 0, key_gen_time: 42.5, sign_time: Some(156.3), verify_time: Some(45.2), encaps_time: None, decaps_time: None, peak_memory: 128.0, public_key_size: 1952, secret_key_size: 4016, signature_size: Some(3293), ciphertext_size: None },
    SeedRun { algorithm: 0, key_gen_time: 38.2, sign_time: Some(142.1), verify_time: Some(41.8), encaps_time: None, decaps_time: None, peak_memory: 124.0, public_key_size: 1952, secret_key_size: 4016, signature_size: Some(3293), ciphertext_size: None },
    SeedRun { algorithm: 0, key_gen_time: 35.1, sign_time: Some(138.7), verify_time: Some(39.5), encaps_time: None, decaps_time: None, peak_memory: 120.0, public_key_size: 1952, secret_key_size: 4016, signature_size: Some(3293), ciphertext_size: None },
    SeedRun { algorithm: 1, key_gen_time: 28.4, sign_time: None, verify_time: None, encaps_time: Some(36.2), decaps_time: Some(42.1), peak_memory: 96.0, public_key_size: 1568, secret_key_size: 3168, signature_size: None, ciphertext_size: Some(1568) },
    SeedRun { algorithm: 1, key_gen_time: 25.1, sign_time: None, verify_time: None, encaps_time: Some(32.8), decaps_time: Some(38.5), peak_memory: 92.0, public_key_size: 1568, secret_key_size: 3168, signature_size: None, ciphertext_size: Some(1568) },
    SeedRun { algorithm: 2, key_gen_time: 8542.3, sign_time: Some(312.5), verify_time: Some(28.4), encaps_time: None, decaps_time: None, peak_memory: 256.0, public_key_size: 897, secret_key_size: 1281, signature_size: Some(666), ciphertext_size: None },
    SeedRun { algorithm: 2, key_gen_time: 7856.1, sign_time: Some(298.2), verify_time: Some(26.1), encaps_time: None, decaps_time: None, peak_memory: 248.0, public_key_size: 897, secret_key_size: 1281, signature_size: Some(666), ciphertext_size: None },
    SeedRun { algorithm: 3, key_gen_time: 1256.8, sign_time: Some(8542.1), verify_time: Some(156.3), encaps_time: None, decaps_time: None, peak_memory: 512.0, public_key_size: 64, secret_key_size: 128, signature_size: Some(49856), ciphertext_size: None },
    SeedRun { algorithm: 3, key_gen_time: 1185.2, sign_time: Some(7985.6), verify_time: Some(148.7), encaps_time: None, decaps_time: None, peak_memory: 496.0, public_key_size: 64, secret_key_size: 128, signature_size: Some(49856), ciphertext_size: None },
    SeedRun { algorithm: 4, key_gen_time: 185_623.5, sign_time: None, verify_time: None, encaps_time: Some(42.3), decaps_time: Some(156.8), peak_memory: 1024.0, public_key_size: 524_160, secret_key_size: 13568, signature_size: None, ciphertext_size: Some(188) },
];

fn environments() -> [EnvironmentInfo; 3] {
    [
        EnvironmentInfo {
            cpu_model: "Intel Core i9-12900K".into(),
            cpu_cores: 16,
            ram_mb: 32768,
            os_version: "Ubuntu 22.04".into(),
            compiler_version: "gcc 11.3.0".into(),
        },
        EnvironmentInfo {
            cpu_model: "AMD Ryzen 9 5950X".into(),
            cpu_cores: 16,
            ram_mb: 65536,
            os_version: "Debian 12".into(),
            compiler_version: "gcc 12.2.0".into(),
        },
        EnvironmentInfo {
            cpu_model: "Apple M2 Max".into(),
            cpu_cores: 12,
            ram_mb: 32768,
            os_version: "macOS 14.0".into(),
            compiler_version: "clang 15.0.0".into(),
        },
    ]
}

/// Load the demo dataset into an empty database
///
/// Submissions and runs go through the regular pipeline, so leaderboard
/// entries carry honestly computed scores. A non-empty database is left
/// untouched.
pub fn load_demo_data(db: &Database) -> Result<()> {
    if !db.algorithms.is_empty() {
        tracing::info!("database already populated, skipping demo data");
        return Ok(());
    }

    let mut algorithm_ids = Vec::with_capacity(ALGORITHMS.len());
    for seed in &ALGORITHMS {
        let (researcher_name, researcher_email, affiliation) = seed.researcher;
        let algorithm = service::submit_algorithm(
            db,
            &SubmitAlgorithm {
                name: seed.name.to_string(),
                version: seed.version.to_string(),
                category: seed.category,
                description: seed.description.to_string(),
                source_code: seed.source_code.to_string(),
                language: seed.language.to_string(),
                researcher_name: researcher_name.to_string(),
                researcher_email: researcher_email.to_string(),
                affiliation: Some(affiliation.to_string()),
            },
        )?;
        if seed.verified {
            db.algorithms.set_verified(&algorithm.id, true);
        }
        algorithm_ids.push(algorithm.id);
    }

    let environments = environments();
    for (index, run) in RUNS.iter().enumerate() {
        service::ingest_benchmark(
            db,
            &BenchmarkSubmission {
                algorithm_id: algorithm_ids[run.algorithm],
                metrics: BenchmarkMetrics {
                    key_gen_time: run.key_gen_time,
                    sign_time: run.sign_time,
                    verify_time: run.verify_time,
                    encaps_time: run.encaps_time,
                    decaps_time: run.decaps_time,
                    peak_memory: run.peak_memory,
                    stack_usage: None,
                    public_key_size: run.public_key_size,
                    secret_key_size: run.secret_key_size,
                    signature_size: run.signature_size,
                    ciphertext_size: run.ciphertext_size,
                },
                environment: environments[index % environments.len()].clone(),
            },
        )?;
    }

    tracing::info!(
        researchers = db.researchers.len(),
        algorithms = db.algorithms.len(),
        benchmarks = db.benchmarks.len(),
        "demo data loaded"
    );
    Ok(())
}
