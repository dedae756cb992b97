//! Singleton: one lazily built instance per type, shared for the life of the
//! process.
//!
//! The instance table is keyed by [`TypeId`], so any `Send + Sync` type can be
//! made a singleton through [`instance_of`]. Construction uses double-checked
//! locking: a read-locked lookup on the fast path, then a re-check under the
//! construction mutex before building anything.
//!
//! Run with: cargo run --bin p1_singleton

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use lazy_static::lazy_static;
use tracing::{debug, warn};

type Instance = Arc<dyn Any + Send + Sync>;

lazy_static! {
    static ref INSTANCES: RwLock<HashMap<TypeId, Instance>> = RwLock::new(HashMap::new());
    static ref CONSTRUCTION_LOCK: Mutex<()> = Mutex::new(());
}

// A panic inside some other holder must not take the whole table down with it.
fn recover<G>(poisoned: PoisonError<G>) -> G {
    warn!("singleton lock was poisoned, recovering");
    poisoned.into_inner()
}

fn lookup<T: Any + Send + Sync>() -> Option<Arc<T>> {
    let table = INSTANCES.read().unwrap_or_else(recover);
    table
        .get(&TypeId::of::<T>())
        .cloned()
        .and_then(|instance| instance.downcast::<T>().ok())
}

/// Return the process-wide instance of `T`, building it with `init` on first
/// access.
///
/// `init` runs at most once per type, no matter how many threads race on the
/// first call. It runs while the construction lock is held, so it must not
/// call `instance_of` itself.
pub fn instance_of<T, F>(init: F) -> Arc<T>
where
    T: Any + Send + Sync,
    F: FnOnce() -> T,
{
    if let Some(existing) = lookup::<T>() {
        return existing;
    }

    let _guard = CONSTRUCTION_LOCK.lock().unwrap_or_else(recover);

    // Another thread may have won the race while we waited for the lock.
    if let Some(existing) = lookup::<T>() {
        return existing;
    }

    let instance = Arc::new(init());
    debug!(
        type_name = std::any::type_name::<T>(),
        "constructed singleton instance"
    );

    let erased: Instance = instance.clone();
    INSTANCES
        .write()
        .unwrap_or_else(recover)
        .insert(TypeId::of::<T>(), erased);

    instance
}

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// The demo singleton: a single shared, mutable `value`.
#[derive(Debug)]
pub struct Singleton {
    value: RwLock<Option<String>>,
}

impl Singleton {
    /// Get the shared instance. Only the very first caller's `value` is used;
    /// later values are ignored.
    pub fn get_instance(value: Option<&str>) -> Arc<Singleton> {
        instance_of(|| {
            CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            Singleton {
                value: RwLock::new(value.map(str::to_owned)),
            }
        })
    }

    pub fn value(&self) -> Option<String> {
        self.value.read().unwrap_or_else(recover).clone()
    }

    /// Every holder of the instance sees the update.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.write().unwrap_or_else(recover) = Some(value.into());
    }

    pub fn some_business_logic(&self) -> String {
        format!(
            "Executing business logic with value: {}",
            display_value(&self.value())
        )
    }

    /// How many times the demo instance has been built in this process.
    pub fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

fn display_value(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();

    let s1 = Singleton::get_instance(Some("First instance"));
    let s2 = Singleton::get_instance(Some("Second instance"));

    if Arc::ptr_eq(&s1, &s2) {
        lines.push("Singleton works, both variables contain the same instance.".to_string());
    } else {
        lines.push("Singleton failed, variables contain different instances.".to_string());
    }

    lines.push(format!("s1 value: {}", display_value(&s1.value())));
    lines.push(format!("s2 value: {}", display_value(&s2.value())));

    // The second initialization value was ignored; updates go through the shared instance.
    s2.set_value("Updated value");
    lines.push(format!("s1 value after update: {}", display_value(&s1.value())));
    lines.push(format!("s2 value after update: {}", display_value(&s2.value())));

    lines.push(s1.some_business_logic());
    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use std::panic;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_same_instance_on_every_call() {
        struct Config(u32);

        let first = instance_of(|| Config(7));
        let second = instance_of(|| Config(99));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.0, 7);
    }

    #[test]
    fn test_init_not_called_once_built() {
        struct Cache;

        let _ = instance_of(|| Cache);
        let _ = instance_of::<Cache, _>(|| panic!("init must not run twice"));
    }

    #[test]
    fn test_distinct_types_get_distinct_instances() {
        struct Left(&'static str);
        struct Right(&'static str);

        let left = instance_of(|| Left("left"));
        let right = instance_of(|| Right("right"));

        assert_eq!(left.0, "left");
        assert_eq!(right.0, "right");
    }

    #[test]
    fn test_panicking_init_does_not_poison_the_table() {
        struct Flaky;
        struct Healthy(u32);

        let result = panic::catch_unwind(|| instance_of::<Flaky, _>(|| panic!("init failed")));
        assert!(result.is_err());

        // The construction lock is now poisoned; later callers recover it.
        assert_eq!(instance_of(|| Healthy(3)).0, 3);
        let retried = instance_of(|| Flaky);
        assert!(Arc::ptr_eq(&retried, &instance_of(|| Flaky)));
    }

    #[test]
    fn test_concurrent_first_access_constructs_once() {
        static BUILT: AtomicUsize = AtomicUsize::new(0);
        struct Contended;

        const THREADS: usize = 16;
        let barrier = Barrier::new(THREADS);

        let instances: Vec<Arc<Contended>> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        instance_of(|| {
                            BUILT.fetch_add(1, Ordering::SeqCst);
                            Contended
                        })
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(BUILT.load(Ordering::SeqCst), 1);
        assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
    }

    #[test]
    fn test_parallel_access_with_rayon() {
        static BUILT: AtomicUsize = AtomicUsize::new(0);
        struct Pooled;

        let instances: Vec<Arc<Pooled>> = (0..256)
            .into_par_iter()
            .map(|_| {
                instance_of(|| {
                    BUILT.fetch_add(1, Ordering::SeqCst);
                    Pooled
                })
            })
            .collect();

        assert_eq!(BUILT.load(Ordering::SeqCst), 1);
        assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
    }

    #[test]
    fn test_singleton_updates_are_shared() {
        let a = Singleton::get_instance(Some("First instance"));
        let b = Singleton::get_instance(None);

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(Singleton::construction_count(), 1);

        b.set_value("Updated value");
        assert_eq!(a.value(), b.value());
        assert!(a.some_business_logic().starts_with("Executing business logic with value: "));
    }

    #[test]
    fn test_demo_output() {
        let lines = demo();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "Singleton works, both variables contain the same instance."
        );
        assert!(lines[1].starts_with("s1 value: "));
        assert!(lines[2].starts_with("s2 value: "));
        assert_eq!(lines[3], "s1 value after update: Updated value");
        assert_eq!(lines[4], "s2 value after update: Updated value");
        assert_eq!(
            lines[5],
            "Executing business logic with value: Updated value"
        );
    }
}
