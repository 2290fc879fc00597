//! trellis-routes: resolve request paths against a route table
//!
//! ```text
//! trellis-routes --routes routes.toml --list /user/42 /files/css/site.css
//! ```
//!
//! Loads the table exactly as a server would, so registration errors
//! (conflicting parameters, duplicate routes) are reported before deploy.

use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trellis_core::{RouteGroup, RouteTable};
use trellis_router::PathTree;

#[derive(Parser)]
#[command(name = "trellis-routes")]
#[command(about = "Check how request paths resolve against a trellis route table", long_about = None)]
struct Cli {
    /// Route table (TOML)
    #[arg(short, long)]
    routes: PathBuf,

    /// Print every registered route
    #[arg(short, long)]
    list: bool,

    /// Log each registered route
    #[arg(short, long)]
    verbose: bool,

    /// Request paths to resolve
    paths: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "trellis_router=debug,trellis_core=debug,trellis_routes=debug"
    } else {
        "trellis_router=info,trellis_core=info,trellis_routes=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, routes = %cli.routes.display(), "route table rejected");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> trellis_core::Result<()> {
    let tree = RouteTable::load(&cli.routes)?.build_tree()?;
    info!(
        routes = tree.len(),
        file = %cli.routes.display(),
        "route table loaded"
    );

    if cli.list {
        for pattern in tree.patterns() {
            println!("{pattern}");
        }
    }
    for path in &cli.paths {
        println!("{}", describe(&tree, path));
    }
    Ok(())
}

/// One line: the path, the route it resolves to, captured values
fn describe(tree: &PathTree<RouteGroup>, path: &str) -> String {
    let path = path.split_once('?').map_or(path, |(path, _)| path);

    let Some(m) = tree.find(path) else {
        return format!("{path} -> <default>");
    };

    let mut line = format!("{path} -> {} [{}]", m.value.pattern, m.value);
    for (name, value) in &m.params {
        let _ = write!(line, " {name}={value}");
    }
    if let Some(tail) = m.tail() {
        let _ = write!(line, " *={tail}");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> PathTree<RouteGroup> {
        RouteTable::from_toml_str(
            r#"
            [[route]]
            pattern = "user/#uid"
            handler = "profile"

            [[route]]
            pattern = "user/#uid/$action"
            method = "POST"
            handler = "act"

            [[route]]
            pattern = "files/*"
            handler = "files"
            "#,
        )
        .unwrap()
        .build_tree()
        .unwrap()
    }

    #[test]
    fn test_describe_match() {
        let tree = tree();
        assert_eq!(describe(&tree, "/user/42"), "/user/42 -> user/#uid [profile] uid=42");
        assert_eq!(
            describe(&tree, "/user/42/ban"),
            "/user/42/ban -> user/#uid/$action [POST=act] uid=42 action=ban"
        );
        assert_eq!(
            describe(&tree, "/files/css/site.css?v=3"),
            "/files/css/site.css -> files/* [files] *=css/site.css"
        );
    }

    #[test]
    fn test_describe_default() {
        let tree = tree();
        assert_eq!(describe(&tree, "/user/me"), "/user/me -> <default>");
        assert_eq!(describe(&tree, "/"), "/ -> <default>");
    }

    #[test]
    fn test_cli_args() {
        let cli =
            Cli::try_parse_from(["trellis-routes", "--routes", "r.toml", "-l", "/a", "/b"])
                .unwrap();
        assert_eq!(cli.routes, PathBuf::from("r.toml"));
        assert!(cli.list);
        assert!(!cli.verbose);
        assert_eq!(cli.paths, vec!["/a", "/b"]);

        assert!(Cli::try_parse_from(["trellis-routes", "/a"]).is_err());
    }
}
