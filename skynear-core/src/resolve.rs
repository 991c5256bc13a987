//! Response assembly: selection + flight-table classification.

use serde::Serialize;

use crate::flights::FlightTable;
use crate::geo::GeoPoint;
use crate::select::nearest;
use crate::types::{normalize_callsign, AircraftState, UNKNOWN};
use crate::unseen::UnseenLog;

/// Fully resolved nearest-flight answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFlight {
    pub callsign: String,
    pub origin: String,
    pub destination: String,
    pub airline: String,
    pub model: String,
}

/// Resolve a batch of states into the nearest known or unknown flight.
///
/// `None` means no state carried a position. A callsign missing from the
/// table is recorded in the unseen log best-effort: an append failure is
/// reported on stderr and does not change the response.
pub fn resolve(
    reference: GeoPoint,
    states: &[AircraftState],
    flights: &FlightTable,
    unseen: &dyn UnseenLog,
) -> Option<ResolvedFlight> {
    let plane = nearest(reference, states)?;
    let callsign =
        normalize_callsign(plane.callsign.as_deref()).unwrap_or_else(|| UNKNOWN.to_string());

    if let Some(record) = flights.lookup(&callsign) {
        return Some(ResolvedFlight {
            callsign,
            origin: record.origin().to_string(),
            destination: record.destination().to_string(),
            airline: record.airline().to_string(),
            model: record.model().to_string(),
        });
    }

    match unseen.record_if_absent(&callsign) {
        Ok(true) => eprintln!("[unseen] recorded callsign: {callsign}"),
        Ok(false) => {}
        Err(e) => eprintln!("[unseen] append failed: {e}"),
    }

    Some(ResolvedFlight {
        callsign,
        origin: UNKNOWN.to_string(),
        destination: UNKNOWN.to_string(),
        airline: UNKNOWN.to_string(),
        model: UNKNOWN.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
