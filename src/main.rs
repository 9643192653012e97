use image_mirror::cli::{Args, Runner};
use image_mirror::logging::Logger;
use std::process;

fn main() {
    let args = Args::parse_args().from_env();

    let runner = match Runner::new(args) {
        Ok(runner) => runner,
        Err(e) => {
            Logger::new_quiet().error(&e.to_string());
            process::exit(2);
        }
    };

    if let Err(e) = runner.run() {
        runner.logger().error(&format!("Fatal error: {}", e));
        process::exit(1);
    }
}
