use seqsearch::search::parallel::{ParallelConfig, partitioned_search};
use seqsearch::search::{
    Algorithm, FaultReason, SearchError, SearchOutcome, binary_search, linear_search,
};
use seqsearch::workload::{SampleConfig, generate_workload};
use std::thread;
use std::time::{Duration, Instant};

fn config(workers: usize) -> ParallelConfig {
    ParallelConfig::default()
        .with_workers(workers)
        .with_timeout(Duration::from_secs(5))
        .with_poll_interval(Duration::from_millis(5))
}

#[test]
fn test_hundred_elements_four_workers() {
    let workload = generate_workload(&SampleConfig::with_size(100).with_seed_option(Some(11)))
        .unwrap();
    let seq = workload.sequence;
    let target = seq[37];

    let started = Instant::now();
    let result = partitioned_search(binary_search, &seq, &target, &config(4)).unwrap();

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(result.outcomes.len(), 4);
    assert_eq!(result.found_count(), 1);
    assert_eq!(result.global_outcome(), SearchOutcome::Found(37));
}

#[test]
fn test_every_algorithm_agrees_with_direct_search() {
    let config = SampleConfig::with_size(500)
        .with_max_value(100_000)
        .with_seed_option(Some(5));
    let seq = generate_workload(&config).unwrap().sequence;

    for algorithm in Algorithm::ALL {
        for &target in [seq[0], seq[123], seq[499], 0, 100_001].iter() {
            let direct = algorithm.search(&seq, &target).unwrap();
            let parallel = partitioned_search(
                algorithm.search_fn::<u64>(),
                &seq,
                &target,
                &ParallelConfig::for_algorithm(algorithm)
                    .with_workers(6)
                    .with_timeout(Duration::from_secs(5)),
            )
            .unwrap();
            assert_eq!(
                parallel.global_outcome(),
                direct,
                "{} target {}",
                algorithm,
                target
            );
        }
    }
}

#[test]
fn test_faults_collected_after_all_workers_finish() {
    let seq: Vec<u32> = (0..40).collect();
    let search = |part: &[u32], value: &u32| {
        match part[0] {
            0 => panic!("first partition"),
            10 => Err(SearchError::invalid_input("second partition")),
            20 => {
                thread::sleep(Duration::from_millis(100));
                linear_search(part, value)
            }
            _ => linear_search(part, value),
        }
    };

    let err = partitioned_search(search, &seq, &25, &config(4)).unwrap_err();
    match err {
        SearchError::WorkerFailure { failures, total } => {
            assert_eq!(total, 4);
            let ids: Vec<_> = failures.iter().map(|f| f.worker_id).collect();
            assert_eq!(ids, vec![0, 1]);
            assert!(matches!(failures[0].reason, FaultReason::Panicked(_)));
            assert!(matches!(failures[1].reason, FaultReason::Search(_)));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_hung_worker_does_not_block_forever() {
    let seq: Vec<u32> = (0..20).collect();
    let search = |part: &[u32], value: &u32| {
        if part.contains(value) {
            thread::sleep(Duration::from_secs(10));
        }
        linear_search(part, value)
    };
    let config = config(4).with_timeout(Duration::from_millis(300));

    let started = Instant::now();
    let err = partitioned_search(search, &seq, &12, &config).unwrap_err();
    assert!(started.elapsed() < Duration::from_secs(3));

    match err {
        SearchError::WorkerFailure { failures, .. } => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].worker_id, 2);
            assert_eq!(failures[0].reason, FaultReason::NoResponse);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
