use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum WorkerPoolError {
    ZeroThreads,
    Build(rayon::ThreadPoolBuildError),
}

impl fmt::Display for WorkerPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroThreads => write!(f, "worker pool needs at least one thread"),
            Self::Build(err) => write!(f, "failed to start worker pool: {}", err),
        }
    }
}

impl Error for WorkerPoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroThreads => None,
            Self::Build(err) => Some(err),
        }
    }
}

/// A dedicated rayon pool with an explicit thread count.
///
/// Renders run inside [`install`](Self::install), so the global rayon pool is
/// never configured or touched.
#[derive(Debug)]
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    pub fn new(threads: usize) -> Result<Self, WorkerPoolError> {
        if threads == 0 {
            return Err(WorkerPoolError::ZeroThreads);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("render-worker-{}", index))
            .build()
            .map_err(WorkerPoolError::Build)?;

        log::debug!("started worker pool with {} threads", threads);

        Ok(Self { pool })
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threads_is_rejected() {
        assert!(matches!(WorkerPool::new(0), Err(WorkerPoolError::ZeroThreads)));
    }

    #[test]
    fn pool_reports_requested_thread_count() {
        for threads in [1, 2, 3] {
            let pool = WorkerPool::new(threads).unwrap();
            assert_eq!(pool.threads(), threads);
        }
    }

    #[test]
    fn install_runs_inside_the_pool() {
        let pool = WorkerPool::new(3).unwrap();
        let threads_seen = pool.install(rayon::current_num_threads);

        assert_eq!(threads_seen, 3);
    }
}
