use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn run_test<F>(test_fn: F) -> anyhow::Result<()>
where
    F: FnOnce() -> anyhow::Result<()>,
{
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    test_fn()
}
