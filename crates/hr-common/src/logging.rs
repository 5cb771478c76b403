use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

pub const LOG_DIR_ENV: &str = "HR_LOG_DIR";
pub const LOG_BACKTRACE_ENV: &str = "HR_LOG_INCLUDE_BACKTRACE";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn flag_enabled(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Route panics through `tracing::error!` with thread and location. Installed
/// once per process; later calls are no-ops.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        let include_backtrace = std::env::var(LOG_BACKTRACE_ENV)
            .map(|value| flag_enabled(&value))
            .unwrap_or(false);

        panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();
            let thread_name = thread.name().unwrap_or("unknown");

            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()));
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".into());

            tracing::error!(
                application = app_name,
                %thread_name,
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}

/// Daily-rotated `<dir>/<app>.log`.
fn daily_file_writer(app_name: &'static str, dir: &Path) -> io::Result<BoxMakeWriter> {
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Ok(BoxMakeWriter::new(non_blocking))
}

/// Install the global fmt subscriber. `RUST_LOG` filters (default `info`);
/// `HR_LOG_DIR` switches output from stdout to a daily-rotated file.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    let Some(dir) = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from) else {
        let _ = builder.try_init();
        return;
    };

    match daily_file_writer(app_name, &dir) {
        Ok(writer) => {
            let _ = builder.with_writer(writer).with_ansi(false).try_init();
        }
        Err(err) => {
            // warn only once stdout is wired up, otherwise the event is dropped
            let _ = builder.try_init();
            tracing::warn!(
                error = %err,
                dir = %dir.display(),
                "failed to create HR_LOG_DIR; falling back to stdout"
            );
        }
    }
}
