mod handlers;
pub mod parse;

pub use handlers::sessions_from;
pub use parse::Cli;

use crate::core::error::GraphError;

pub fn run(cli: Cli) -> Result<(), GraphError> {
    match cli.cmd {
        parse::Command::Plot(a) => handlers::plot(a),
        parse::Command::Curves(a) => handlers::curves(a),
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Styles => {
            handlers::styles();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
