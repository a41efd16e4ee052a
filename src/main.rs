//! Asset Bundler - embeds a deployment asset tree into one generated source file.
//!
//! This binary walks `<SOURCE_ROOT>`, digests every file and writes the bundle
//! to `<OUTPUT>`. Any error aborts the run with a non-zero exit code.

use std::process;

fn main() {
    let args = asset_bundler::cli::parse_args();

    // Initialize logging (progress lines go to stdout)
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Run CLI and get exit code
    let exit_code = match asset_bundler::cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
