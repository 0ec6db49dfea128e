//! Route search errors.

use crate::domain::Station;

/// Error from route search.
///
/// Every variant is a caller-input or topology error: deterministic for the
/// same network and stations, and never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and target are the same station
    #[error("source and target are the same station: {0}")]
    SameStation(Station),

    /// Station is not part of any line in the network
    #[error("station {0} is not in the network")]
    StationNotFound(Station),

    /// Both stations exist but no route connects them
    #[error("stations {from} and {to} are not connected")]
    Disconnected { from: Station, to: Station },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    #[test]
    fn error_display() {
        let gangnam = Station::new(StationId(1), "Gangnam");
        let magok = Station::new(StationId(4), "Magok");

        let err = PathError::SameStation(gangnam.clone());
        assert_eq!(
            err.to_string(),
            "source and target are the same station: Gangnam"
        );

        let err = PathError::StationNotFound(magok.clone());
        assert_eq!(err.to_string(), "station Magok is not in the network");

        let err = PathError::Disconnected {
            from: gangnam,
            to: magok,
        };
        assert_eq!(
            err.to_string(),
            "stations Gangnam and Magok are not connected"
        );
    }
}
