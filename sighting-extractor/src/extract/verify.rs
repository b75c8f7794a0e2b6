//! Cross verification of extracted fields.
//!
//! The verifier only confirms, corrects or clears fields a finder already
//! set. It never fills in a field that was not found.

use tracing::debug;

use crate::domain::SightingReport;
use crate::reference::ReferenceData;

/// What verification changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verification {
    /// `line` was replaced by the station's only line.
    pub line_corrected: bool,
    /// `line` was cleared because the station is not on it.
    pub line_cleared: bool,
    /// `direction` was cleared as inconsistent or degenerate.
    pub direction_cleared: bool,
}

impl Verification {
    /// Whether the report was modified.
    pub fn changed(&self) -> bool {
        self.line_corrected || self.line_cleared || self.direction_cleared
    }
}

/// Check the report's fields against each other and fix what disagrees.
///
/// - A station not served by the line: the line is replaced by the
///   station's only line, or cleared when the station has several (or none).
/// - A direction not served by the (possibly corrected) line is cleared.
/// - With all three fields set, a direction that gives no
///   [`Heading`](crate::domain::Heading) from the station along the line
///   is cleared. This catches stations that serve the line without being
///   in its stop sequence.
/// - A direction equal to the station is cleared.
pub fn verify(report: &mut SightingReport, reference: &ReferenceData) -> Verification {
    let mut outcome = Verification::default();

    if let (Some(line), Some(station)) = (&report.line, &report.station)
        && !reference.is_on_line(station, line)
    {
        let replacement = reference
            .station(station)
            .and_then(|s| s.sole_line())
            .cloned();
        match replacement {
            Some(sole) => {
                debug!("line replaced by the station's only line");
                report.line = Some(sole);
                outcome.line_corrected = true;
            }
            None => {
                debug!("line cleared: station is not on it");
                report.line = None;
                outcome.line_cleared = true;
            }
        }
    }

    if let (Some(line), Some(direction)) = (&report.line, &report.direction)
        && !reference.is_on_line(direction, line)
    {
        debug!("direction cleared: not on line");
        report.direction = None;
        outcome.direction_cleared = true;
    }

    if let (Some(line), Some(station), Some(direction)) =
        (&report.line, &report.station, &report.direction)
        && reference
            .line(line)
            .and_then(|l| l.heading(station, direction))
            .is_none()
    {
        debug!("direction cleared: no heading along line");
        report.direction = None;
        outcome.direction_cleared = true;
    }

    if report.direction.is_some() && report.direction == report.station {
        debug!("direction cleared: same as station");
        report.direction = None;
        outcome.direction_cleared = true;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Heading, LineId, StationId};
    use crate::extract::fixtures::network;

    fn report(line: Option<&str>, station: Option<&str>, direction: Option<&str>) -> SightingReport {
        SightingReport {
            line: line.map(|l| LineId::parse(l).unwrap()),
            station: station.map(|s| StationId::parse(s).unwrap()),
            direction: direction.map(|s| StationId::parse(s).unwrap()),
        }
    }

    #[test]
    fn consistent_report_is_untouched() {
        let mut r = report(Some("U8"), Some("Boddinstraße"), Some("Hermannstraße"));
        let outcome = verify(&mut r, &network());

        assert!(!outcome.changed());
        assert_eq!(r, report(Some("U8"), Some("Boddinstraße"), Some("Hermannstraße")));
    }

    #[test]
    fn wrong_line_replaced_by_sole_line() {
        // Leinestraße is only on U8.
        let mut r = report(Some("S41"), Some("Leinestraße"), None);
        let outcome = verify(&mut r, &network());

        assert!(outcome.line_corrected);
        assert_eq!(r.line, Some(LineId::parse("U8").unwrap()));
    }

    #[test]
    fn wrong_line_cleared_for_interchange() {
        // Hermannplatz is on U7 and U8.
        let mut r = report(Some("S41"), Some("Hermannplatz"), None);
        let outcome = verify(&mut r, &network());

        assert!(outcome.line_cleared);
        assert_eq!(r.line, None);
        assert_eq!(r.station, Some(StationId::parse("Hermannplatz").unwrap()));
    }

    #[test]
    fn wrong_line_cleared_for_station_without_lines() {
        let mut r = report(Some("U8"), Some("Parkstraße"), None);
        verify(&mut r, &network());
        assert_eq!(r.line, None);
    }

    #[test]
    fn direction_off_line_is_cleared() {
        let mut r = report(Some("U8"), Some("Boddinstraße"), Some("Südkreuz"));
        let outcome = verify(&mut r, &network());

        assert!(outcome.direction_cleared);
        assert_eq!(r.direction, None);
        assert_eq!(r.line, Some(LineId::parse("U8").unwrap()));
    }

    #[test]
    fn direction_checked_against_corrected_line() {
        // Line S41 is corrected to U8 via Leinestraße; Hermannstraße is on U8.
        let mut r = report(Some("S41"), Some("Leinestraße"), Some("Hermannstraße"));
        verify(&mut r, &network());
        assert_eq!(r, report(Some("U8"), Some("Leinestraße"), Some("Hermannstraße")));

        // Corrected to U8, but Südkreuz is only on S41.
        let mut r = report(Some("S41"), Some("Leinestraße"), Some("Südkreuz"));
        verify(&mut r, &network());
        assert_eq!(r, report(Some("U8"), Some("Leinestraße"), None));
    }

    #[test]
    fn direction_kept_without_line() {
        let mut r = report(None, Some("Boddinstraße"), Some("Südkreuz"));
        let outcome = verify(&mut r, &network());
        assert!(!outcome.changed());
        assert_eq!(r.direction, Some(StationId::parse("Südkreuz").unwrap()));
    }

    #[test]
    fn direction_equal_to_station_is_cleared() {
        let mut r = report(None, Some("Boddinstraße"), Some("Boddinstraße"));
        let outcome = verify(&mut r, &network());
        assert!(outcome.direction_cleared);
        assert_eq!(r.direction, None);
    }

    #[test]
    fn never_fills_missing_fields() {
        let mut r = report(None, Some("Leinestraße"), None);
        verify(&mut r, &network());
        assert_eq!(r, report(None, Some("Leinestraße"), None));

        let mut r = report(Some("U8"), None, None);
        verify(&mut r, &network());
        assert_eq!(r, report(Some("U8"), None, None));
    }

    #[test]
    fn direction_without_heading_is_cleared() {
        // Südkreuz is declared on U8 but is not one of its stops.
        let data = ReferenceData::builder()
            .line("U8", &["Boddinstraße", "Leinestraße", "Hermannstraße"])
            .station_line("Südkreuz", "U8")
            .build()
            .unwrap();

        let mut r = report(Some("U8"), Some("Boddinstraße"), Some("Südkreuz"));
        let outcome = verify(&mut r, &data);

        assert!(outcome.direction_cleared);
        assert_eq!(r, report(Some("U8"), Some("Boddinstraße"), None));
    }

    #[test]
    fn same_station_cleared_by_heading_check() {
        let mut r = report(Some("U8"), Some("Boddinstraße"), Some("Boddinstraße"));
        let outcome = verify(&mut r, &network());
        assert!(outcome.direction_cleared);
        assert_eq!(r, report(Some("U8"), Some("Boddinstraße"), None));
    }

    #[test]
    fn verified_triple_has_heading() {
        let data = network();
        let mut r = report(Some("U8"), Some("Boddinstraße"), Some("Hermannstraße"));
        verify(&mut r, &data);

        let line = data.line(r.line.as_ref().unwrap()).unwrap();
        let heading = line.heading(r.station.as_ref().unwrap(), r.direction.as_ref().unwrap());
        assert_eq!(heading, Some(Heading::Forward));
    }
}
