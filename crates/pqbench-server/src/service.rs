//! Submission and ingest pipeline
//!
//! Each benchmark ingest is a sequential read-all-runs, aggregate,
//! normalize, write-one-entry flow. The benchmark insert and the
//! leaderboard upsert are two separate writes; a failure between them
//! leaves the run recorded and the entry stale until the next ingest for
//! the same algorithm recomputes it.

use chrono::Utc;
use pqbench_core::{
    compute_run_hash, overall_score, score_within, Algorithm, AlgorithmId, BenchError, Benchmark,
    BenchmarkId, BenchmarkSubmission, BestMetrics, EntryId, LeaderboardEntry, Researcher,
    ResearcherId, Result, SubmitAlgorithm, NEUTRAL_SCORE,
};
use pqbench_storage::Database;
use ring::pbkdf2;
use std::num::NonZeroU32;
use uuid::Uuid;

const PBKDF2_ITERATIONS: u32 = 100_000;
const SALT_LEN: usize = 16;
const CREDENTIAL_LEN: usize = 32;

/// Register an algorithm, creating its researcher on first contact
///
/// The (name, version) pair must be unused. A researcher created here gets
/// a provisional random credential; nothing reads it back.
pub fn submit_algorithm(db: &Database, input: &SubmitAlgorithm) -> Result<Algorithm> {
    input.validate()?;

    let researcher = match db.researchers.find_by_email(&input.researcher_email) {
        Some(existing) => existing,
        None => {
            let now = Utc::now();
            let researcher = Researcher {
                id: ResearcherId::generate(),
                name: input.researcher_name.clone(),
                email: input.researcher_email.clone(),
                affiliation: input.affiliation.clone(),
                password_hash: hash_password(&Uuid::new_v4().to_string()),
                created_at: now,
                updated_at: now,
            };
            db.researchers.insert(researcher.clone())?;
            tracing::info!(email = %researcher.email, "registered researcher");
            researcher
        }
    };

    if db
        .algorithms
        .find_by_name_version(&input.name, &input.version)
        .is_some()
    {
        return Err(BenchError::AlgorithmExists {
            name: input.name.clone(),
            version: input.version.clone(),
        });
    }

    let now = Utc::now();
    let algorithm = Algorithm {
        id: AlgorithmId::generate(),
        name: input.name.clone(),
        version: input.version.clone(),
        category: input.category,
        description: input.description.clone(),
        source_code: input.source_code.clone(),
        language: input.language.clone(),
        researcher_id: researcher.id,
        verified: false,
        created_at: now,
        updated_at: now,
    };
    db.algorithms.insert(algorithm.clone())?;

    tracing::info!(
        algorithm = %algorithm.name,
        version = %algorithm.version,
        category = %algorithm.category,
        "algorithm submitted"
    );
    Ok(algorithm)
}

/// Record one benchmark run and refresh the algorithm's leaderboard entry
///
/// Validation failures and unknown algorithm ids persist nothing.
pub fn ingest_benchmark(db: &Database, submission: &BenchmarkSubmission) -> Result<Benchmark> {
    submission.metrics.validate()?;

    let algorithm = db
        .algorithms
        .get(&submission.algorithm_id)
        .ok_or(BenchError::AlgorithmNotFound(submission.algorithm_id))?;

    let now = Utc::now();
    let run_hash = compute_run_hash(
        algorithm.id,
        &submission.metrics,
        &submission.environment,
        now.timestamp_millis(),
    )?;

    let benchmark = Benchmark {
        id: BenchmarkId::generate(),
        algorithm_id: algorithm.id,
        metrics: submission.metrics.clone(),
        environment: submission.environment.clone(),
        run_hash,
        chain_tx_hash: None,
        created_at: now,
    };
    db.benchmarks.append(benchmark.clone());

    refresh_leaderboard(db, &algorithm);

    tracing::info!(
        algorithm = %algorithm.name,
        run = %benchmark.run_hash,
        "benchmark run recorded"
    );
    Ok(benchmark)
}

/// Recompute one algorithm's leaderboard entry from its full run set
///
/// No runs recorded is a silent no-op. The comparison population is the
/// category's current entries, read before the upsert: the algorithm's own
/// previous entry and not-yet-refreshed siblings are part of the bounds.
/// Only this one entry is rewritten; sibling scores stay as computed at
/// their own last ingest.
pub fn refresh_leaderboard(db: &Database, algorithm: &Algorithm) {
    let runs = db.benchmarks.for_algorithm(&algorithm.id);
    let Some(best) = BestMetrics::aggregate(&runs) else {
        tracing::debug!(algorithm = %algorithm.name, "no runs recorded, nothing to rank");
        return;
    };

    let population = db.leaderboard.in_category(algorithm.category);
    let key_gen_times: Vec<f64> = population.iter().map(|e| e.best_key_gen_time).collect();
    let memory_values: Vec<f64> = population.iter().map(|e| e.lowest_memory).collect();

    let speed_score = score_within(best.best_key_gen_time, &key_gen_times);
    let memory_score = score_within(best.lowest_memory, &memory_values);
    // Placeholder dimension: key/signature sizes are recorded but not yet
    // scored.
    let size_score = NEUTRAL_SCORE;

    db.leaderboard.upsert(LeaderboardEntry {
        id: EntryId::generate(),
        algorithm_id: algorithm.id,
        algorithm_name: algorithm.name.clone(),
        category: algorithm.category,
        speed_score,
        memory_score,
        size_score,
        overall_score: overall_score(speed_score, memory_score, size_score),
        best_key_gen_time: best.best_key_gen_time,
        best_sign_time: best.best_sign_time,
        best_verify_time: best.best_verify_time,
        best_encaps_time: best.best_encaps_time,
        best_decaps_time: best.best_decaps_time,
        lowest_memory: best.lowest_memory,
        run_count: runs.len() as u64,
        last_updated: Utc::now(),
    });
}

/// PBKDF2-HMAC-SHA256 with a fresh random salt
///
/// Format: `pbkdf2-sha256$<iterations>$<salt-hex>$<digest-hex>`
fn hash_password(password: &str) -> String {
    use rand::RngCore;

    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);

    let iterations = NonZeroU32::new(PBKDF2_ITERATIONS).expect("iteration count is nonzero");
    let mut digest = [0u8; CREDENTIAL_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        &salt,
        password.as_bytes(),
        &mut digest,
    );

    format!(
        "pbkdf2-sha256${}${}${}",
        PBKDF2_ITERATIONS,
        hex::encode(salt),
        hex::encode(digest)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqbench_core::{BenchmarkMetrics, Category, EnvironmentInfo};

    fn submission(name: &str, version: &str, category: Category) -> SubmitAlgorithm {
        SubmitAlgorithm {
            name: name.into(),
            version: version.into(),
            category,
            description: "Test scheme".into(),
            source_code: "int keygen(void);".into(),
            language: "C".into(),
            researcher_name: "Alice Chen".into(),
            researcher_email: "alice@crypto.edu".into(),
            affiliation: Some("MIT Cryptography Lab".into()),
        }
    }

    fn environment() -> EnvironmentInfo {
        EnvironmentInfo {
            cpu_model: "Intel Core i9-12900K".into(),
            cpu_cores: 16,
            ram_mb: 32768,
            os_version: "Ubuntu 22.04".into(),
            compiler_version: "gcc 11.3.0".into(),
        }
    }

    fn signature_run(algorithm_id: AlgorithmId, key_gen: f64, memory: f64) -> BenchmarkSubmission {
        BenchmarkSubmission {
            algorithm_id,
            metrics: BenchmarkMetrics {
                key_gen_time: key_gen,
                sign_time: Some(156.3),
                verify_time: Some(45.2),
                encaps_time: None,
                decaps_time: None,
                peak_memory: memory,
                stack_usage: None,
                public_key_size: 1952,
                secret_key_size: 4016,
                signature_size: Some(3293),
                ciphertext_size: None,
            },
            environment: environment(),
        }
    }

    #[test]
    fn test_submit_creates_researcher_once() {
        let db = Database::new();
        submit_algorithm(&db, &submission("Dilithium", "3.1", Category::Lattice)).unwrap();
        submit_algorithm(&db, &submission("Falcon", "512", Category::Lattice)).unwrap();

        assert_eq!(db.researchers.len(), 1);
        assert_eq!(db.algorithms.len(), 2);
    }

    #[test]
    fn test_submit_rejects_duplicate_name_version() {
        let db = Database::new();
        submit_algorithm(&db, &submission("Falcon", "512", Category::Lattice)).unwrap();

        let err = submit_algorithm(&db, &submission("Falcon", "512", Category::Lattice));
        assert!(matches!(err, Err(BenchError::AlgorithmExists { .. })));
        assert_eq!(db.algorithms.len(), 1);
    }

    #[test]
    fn test_ingest_unknown_algorithm_persists_nothing() {
        let db = Database::new();
        let ghost = AlgorithmId::generate();

        let err = ingest_benchmark(&db, &signature_run(ghost, 42.5, 128.0));
        assert!(matches!(err, Err(BenchError::AlgorithmNotFound(_))));
        assert_eq!(db.benchmarks.len(), 0);
        assert_eq!(db.leaderboard.len(), 0);
    }

    #[test]
    fn test_ingest_rejects_invalid_metrics() {
        let db = Database::new();
        let algo = submit_algorithm(&db, &submission("Falcon", "512", Category::Lattice)).unwrap();

        let mut bad = signature_run(algo.id, 42.5, 128.0);
        bad.metrics.key_gen_time = -1.0;
        assert!(ingest_benchmark(&db, &bad).is_err());
        assert_eq!(db.benchmarks.len(), 0);
        assert_eq!(db.leaderboard.len(), 0);
    }

    #[test]
    fn test_first_entry_in_category_scores_neutral() {
        let db = Database::new();
        let algo = submit_algorithm(&db, &submission("Dilithium", "3.1", Category::Lattice)).unwrap();
        ingest_benchmark(&db, &signature_run(algo.id, 42.5, 128.0)).unwrap();

        let entry = db.leaderboard.get(&algo.id).unwrap();
        assert_eq!(entry.speed_score, NEUTRAL_SCORE);
        assert_eq!(entry.memory_score, NEUTRAL_SCORE);
        assert_eq!(entry.size_score, NEUTRAL_SCORE);
        assert!((entry.overall_score - NEUTRAL_SCORE).abs() < 1e-9);
        assert_eq!(entry.run_count, 1);
    }

    #[test]
    fn test_best_of_runs_is_minimum() {
        let db = Database::new();
        let algo = submit_algorithm(&db, &submission("Dilithium", "3.1", Category::Lattice)).unwrap();
        ingest_benchmark(&db, &signature_run(algo.id, 42.5, 128.0)).unwrap();
        ingest_benchmark(&db, &signature_run(algo.id, 38.2, 124.0)).unwrap();
        ingest_benchmark(&db, &signature_run(algo.id, 35.1, 120.0)).unwrap();

        let entry = db.leaderboard.get(&algo.id).unwrap();
        assert_eq!(entry.best_key_gen_time, 35.1);
        assert_eq!(entry.lowest_memory, 120.0);
        assert_eq!(entry.run_count, 3);
    }

    #[test]
    fn test_kem_fields_absent_stay_null() {
        let db = Database::new();
        let algo = submit_algorithm(&db, &submission("Kyber", "1024", Category::Lattice)).unwrap();

        // only the mandatory fields, no signature or KEM timings
        let mut run = signature_run(algo.id, 28.4, 96.0);
        run.metrics.sign_time = None;
        run.metrics.verify_time = None;
        run.metrics.signature_size = None;
        ingest_benchmark(&db, &run).unwrap();

        let entry = db.leaderboard.get(&algo.id).unwrap();
        assert_eq!(entry.best_sign_time, None);
        assert_eq!(entry.best_encaps_time, None);
        assert_eq!(entry.best_key_gen_time, 28.4);
    }

    #[test]
    fn test_category_population_normalization() {
        let db = Database::new();
        let fast =
            submit_algorithm(&db, &submission("Dilithium", "3.1", Category::Lattice)).unwrap();
        let slow = submit_algorithm(&db, &submission("Falcon", "512", Category::Lattice)).unwrap();

        ingest_benchmark(&db, &signature_run(fast.id, 35.1, 120.0)).unwrap();
        // population is only the fast entry, degenerate bounds score 100
        ingest_benchmark(&db, &signature_run(slow.id, 8542.3, 256.0)).unwrap();
        assert_eq!(db.leaderboard.get(&slow.id).unwrap().speed_score, 100.0);

        // a second run for the fast algorithm now sees both entries
        ingest_benchmark(&db, &signature_run(fast.id, 36.0, 125.0)).unwrap();
        let fast_entry = db.leaderboard.get(&fast.id).unwrap();
        assert!((fast_entry.speed_score - 100.0).abs() < 1e-9);

        // and a refresh of the slow one lands at the bottom of the range
        ingest_benchmark(&db, &signature_run(slow.id, 9000.0, 260.0)).unwrap();
        let slow_entry = db.leaderboard.get(&slow.id).unwrap();
        assert_eq!(slow_entry.best_key_gen_time, 8542.3);
        assert!(slow_entry.speed_score.abs() < 1e-9);
    }

    #[test]
    fn test_categories_never_cross_contaminate() {
        let db = Database::new();
        let lattice =
            submit_algorithm(&db, &submission("Dilithium", "3.1", Category::Lattice)).unwrap();
        let hash_based =
            submit_algorithm(&db, &submission("SPHINCS+", "SHA256-256f", Category::HashBased))
                .unwrap();

        ingest_benchmark(&db, &signature_run(lattice.id, 35.1, 120.0)).unwrap();
        // a wildly slower run in another category still scores neutral:
        // its category population is empty
        ingest_benchmark(&db, &signature_run(hash_based.id, 185_623.5, 1024.0)).unwrap();

        let entry = db.leaderboard.get(&hash_based.id).unwrap();
        assert_eq!(entry.speed_score, NEUTRAL_SCORE);
        assert_eq!(entry.memory_score, NEUTRAL_SCORE);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let db = Database::new();
        let algo = submit_algorithm(&db, &submission("Dilithium", "3.1", Category::Lattice)).unwrap();
        ingest_benchmark(&db, &signature_run(algo.id, 42.5, 128.0)).unwrap();

        let first = db.leaderboard.get(&algo.id).unwrap();
        refresh_leaderboard(&db, &algo);
        let second = db.leaderboard.get(&algo.id).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.speed_score, second.speed_score);
        assert_eq!(first.memory_score, second.memory_score);
        assert_eq!(first.size_score, second.size_score);
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.best_key_gen_time, second.best_key_gen_time);
        assert_eq!(first.lowest_memory, second.lowest_memory);
        assert_eq!(first.run_count, second.run_count);
    }

    #[test]
    fn test_refresh_without_runs_is_noop() {
        let db = Database::new();
        let algo = submit_algorithm(&db, &submission("Falcon", "512", Category::Lattice)).unwrap();

        refresh_leaderboard(&db, &algo);
        assert!(db.leaderboard.get(&algo.id).is_none());
    }

    #[test]
    fn test_password_hash_format() {
        let hash = hash_password("correct horse battery staple");
        let parts: Vec<&str> = hash.split('$').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "pbkdf2-sha256");
        assert_eq!(parts[1], "100000");
        assert_eq!(parts[2].len(), SALT_LEN * 2);
        assert_eq!(parts[3].len(), CREDENTIAL_LEN * 2);

        // salted: same input, different hash
        assert_ne!(hash, hash_password("correct horse battery staple"));
    }
}
