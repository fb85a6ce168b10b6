use conway_bench::{
    run_benchmarks, run_timed, validate, world::next_cell, Engine, Job, JobResult,
    SequentialEngine, World,
};

/// Engine whose left neighbour wraps to column `width - 2` instead of `width - 1`.
struct MisalignedEngine;

impl MisalignedEngine {
    fn step(read: &World, write: &mut World) {
        let (w, h) = (read.width(), read.height());
        for y in 0..h {
            for x in 0..w {
                let left = if x == 0 { w - 2 } else { x - 1 };
                let cols = [left, x, (x + 1) % w];
                let rows = [(y + h - 1) % h, y, (y + 1) % h];
                let mut neighbors = 0;
                for (j, &ny) in rows.iter().enumerate() {
                    for (i, &nx) in cols.iter().enumerate() {
                        if (i, j) != (1, 1) {
                            neighbors += read.get(nx, ny) as u8;
                        }
                    }
                }
                write.set(x, y, next_cell(read.get(x, y), neighbors) != 0);
            }
        }
    }
}

impl Engine for MisalignedEngine {
    fn execute(&self, job: &Job) -> JobResult {
        run_timed(job, Self::step)
    }

    fn describe(&self) -> &'static str {
        "misaligned wraparound"
    }
}

#[test]
fn test_validator_flags_faulty_engine() {
    let mut blinker = World::new(8, 8);
    for x in 3..=5 {
        blinker.set(x, 4, true);
    }
    let jobs = vec![
        Job::new(World::from_seed(16, 16, 1), 4, "random"),
        // nothing touches the edges, the faulty wraparound is never used
        Job::new(blinker, 4, "centered blinker"),
        Job::new(World::from_seed(16, 16, 2), 4, "random"),
    ];
    let engines: Vec<Box<dyn Engine>> = vec![
        Box::new(SequentialEngine),
        Box::new(MisalignedEngine),
        Box::new(SequentialEngine),
    ];

    let report = validate(&run_benchmarks(&jobs, &engines));

    assert!(!report.passed());
    assert_eq!(report.comparisons, 6);
    let found: Vec<_> = report
        .mismatches
        .iter()
        .map(|m| (m.left, m.right, m.job_index))
        .collect();
    assert_eq!(found, vec![(0, 1, 0), (0, 1, 2), (1, 2, 0), (1, 2, 2)]);
    assert_eq!(report.mismatches[0].right_description, "misaligned wraparound");
}
