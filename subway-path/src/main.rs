use std::path::PathBuf;
use std::process::ExitCode;

use subway_path::domain::{Station, StationId};
use subway_path::network::{Network, NetworkError, RouteResponse};
use subway_path::path::{PathError, PathFinder};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: subway-path <network.json> <source-id> <target-id> <age>";

/// Errors that end a run with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("failed to encode response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parsed command-line arguments.
#[derive(Debug, PartialEq, Eq)]
struct Request {
    network: PathBuf,
    source: StationId,
    target: StationId,
    age: u32,
}

impl Request {
    fn parse(args: &[String]) -> Result<Self, String> {
        let [network, source, target, age] = args else {
            return Err(format!("expected 4 arguments, got {}", args.len()));
        };

        let station = |s: &str| {
            s.parse::<u64>()
                .map(StationId)
                .map_err(|_| format!("invalid station id: {s}"))
        };

        Ok(Self {
            network: PathBuf::from(network),
            source: station(source)?,
            target: station(target)?,
            age: age.parse().map_err(|_| format!("invalid age: {age}"))?,
        })
    }
}

fn run(request: &Request) -> Result<String, CliError> {
    let network = Network::load(&request.network)?;
    let graph = network.graph();
    let finder = PathFinder::new(&graph, network.policy());

    // Ids missing from the file are left for the finder to reject
    let station = |id: StationId| {
        network
            .station(id)
            .cloned()
            .unwrap_or_else(|| Station::new(id, id.to_string()))
    };

    let path = finder.find_shortest_path(
        &station(request.source),
        &station(request.target),
        request.age,
    )?;
    info!(
        distance = path.distance(),
        fare = path.fare().value(),
        "Route found"
    );

    Ok(serde_json::to_string_pretty(&RouteResponse::from(&path))?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match Request::parse(&args) {
        Ok(request) => request,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&request) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, "Route lookup failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    const NETWORK: &str = r#"{
        "stations": [{ "id": 1, "name": "Magok" }, { "id": 2, "name": "Yeongdeungpo-gu Office" }],
        "lines": [{ "id": 5, "name": "Line 5", "surcharge": 900,
                    "sections": [{ "up": 1, "down": 2, "distance": 9 }] }]
    }"#;

    fn network_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(NETWORK.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_request() {
        let request = Request::parse(&args(&["net.json", "1", "2", "15"])).unwrap();
        assert_eq!(
            request,
            Request {
                network: PathBuf::from("net.json"),
                source: StationId(1),
                target: StationId(2),
                age: 15,
            }
        );
    }

    #[test]
    fn parse_rejects_bad_arguments() {
        assert!(Request::parse(&args(&["net.json", "1", "2"])).is_err());
        assert_eq!(
            Request::parse(&args(&["net.json", "x", "2", "15"])),
            Err("invalid station id: x".to_string())
        );
        assert_eq!(
            Request::parse(&args(&["net.json", "1", "2", "-3"])),
            Err("invalid age: -3".to_string())
        );
    }

    #[test]
    fn run_prints_priced_route() {
        let file = network_file();
        let request = Request {
            network: file.path().to_path_buf(),
            source: StationId(1),
            target: StationId(2),
            age: 40,
        };

        let json: serde_json::Value = serde_json::from_str(&run(&request).unwrap()).unwrap();
        assert_eq!(json["distance"], 9);
        assert_eq!(json["fare"], 2150);
    }

    #[test]
    fn run_reports_unknown_station() {
        let file = network_file();
        let request = Request {
            network: file.path().to_path_buf(),
            source: StationId(1),
            target: StationId(42),
            age: 40,
        };

        let err = run(&request).unwrap_err();
        assert!(matches!(
            err,
            CliError::Path(PathError::StationNotFound(ref s)) if s.id() == StationId(42)
        ));
        assert_eq!(err.to_string(), "station #42 is not in the network");
    }
}
