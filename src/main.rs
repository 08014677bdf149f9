//! twa-shell - generate Trusted Web Activity shell resources
//!
//! Usage:
//!   twa-shell generate [--project-dir app] [--skip-values]
//!   twa-shell resources [--format text|json|gradle|xml]
//!   twa-shell shortcuts [--project-dir app] [-o PATH | --stdout]
//!   twa-shell validate [--format text|json]

fn main() {
    twa_shell_lib::cli::run();
}
