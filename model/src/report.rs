//! Citizen issue reports, used by the public report page and the household
//! dashboard.

use derive_more::Display;
use jiff::{Timestamp, tz::TimeZone};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    map::LatLng,
    simulate::{ActionPhase, Delay, SimulatedAction, run_action},
    toast::Notice,
};

/// Largest evidence photo accepted, in bytes.
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IssueType {
    #[display("Illegal Dumping")]
    IllegalDumping,
    #[display("Missed Pickup")]
    MissedPickup,
    #[display("Damaged Bin")]
    DamagedBin,
    #[display("Hazardous Waste")]
    HazardousWaste,
    #[display("Other")]
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 5] = [
        IssueType::IllegalDumping,
        IssueType::MissedPickup,
        IssueType::DamagedBin,
        IssueType::HazardousWaste,
        IssueType::Other,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Please select an issue type.")]
    MissingIssueType,
    #[error("Please set the incident location.")]
    MissingLocation,
    #[error("The incident location is not a valid coordinate.")]
    InvalidCoordinate,
    #[error("Photos must be JPG or PNG up to 10MB.")]
    UnsupportedPhoto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoAttachment {
    pub name: String,
    pub size_bytes: u64,
}

impl PhotoAttachment {
    fn is_acceptable(&self) -> bool {
        let name = self.name.to_ascii_lowercase();
        let image = [".jpg", ".jpeg", ".png"]
            .iter()
            .any(|ext| name.ends_with(ext));
        image && self.size_bytes <= MAX_PHOTO_BYTES
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub issue: Option<IssueType>,
    pub location: Option<LatLng>,
    pub details: String,
    pub photo: Option<PhotoAttachment>,
}

/// A draft that passed every check and may be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReport {
    pub issue: IssueType,
    pub location: LatLng,
    pub details: String,
    pub photo: Option<PhotoAttachment>,
}

impl ReportDraft {
    pub fn validate(&self) -> Result<ValidReport, ReportError> {
        let issue = self.issue.ok_or(ReportError::MissingIssueType)?;
        let location = self.location.ok_or(ReportError::MissingLocation)?;
        if !location.is_valid() {
            return Err(ReportError::InvalidCoordinate);
        }
        if let Some(photo) = &self.photo
            && !photo.is_acceptable()
        {
            return Err(ReportError::UnsupportedPhoto);
        }

        Ok(ValidReport {
            issue,
            location,
            details: self.details.trim().to_string(),
            photo: self.photo.clone(),
        })
    }
}

/// Reference handed back to the citizen, e.g. `RPT-2024-089`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("RPT-{year}-{serial:03}")]
pub struct ReportId {
    year: i16,
    serial: u16,
}

impl ReportId {
    pub fn new(year: i16, serial: u16) -> Self {
        Self {
            year,
            serial: serial % 1000,
        }
    }

    pub fn generate(now: Timestamp) -> Self {
        let year = now.to_zoned(TimeZone::UTC).year();
        let serial = (Uuid::new_v4().as_u128() % 1000) as u16;
        Self::new(year, serial)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedReport {
    pub id: ReportId,
    pub report: ValidReport,
    pub notice: Option<Notice>,
}

/// Validate, then wait out the simulated upload.
///
/// A draft that fails validation returns before any delay starts and no id
/// is generated.
pub async fn submit_report(
    draft: &ReportDraft,
    delay: &impl Delay,
    now: Timestamp,
    on_phase: impl FnMut(ActionPhase),
) -> Result<SubmittedReport, ReportError> {
    let report = draft.validate()?;
    let id = ReportId::generate(now);
    tracing::info!(
        %id,
        issue = %report.issue,
        location = %report.location,
        "submitting report"
    );

    let notice =
        run_action(delay, &SimulatedAction::submit_report(id), on_phase).await;
    Ok(SubmittedReport { id, report, notice })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::CITY_CENTER;
    use crate::simulate::Immediate;
    use futures::executor::block_on;

    fn complete_draft() -> ReportDraft {
        ReportDraft {
            issue: Some(IssueType::IllegalDumping),
            location: Some(CITY_CENTER),
            details: "  Pile of rubble by the road  ".into(),
            photo: None,
        }
    }

    #[test]
    fn report_id_format() {
        assert_eq!(ReportId::new(2024, 89).to_string(), "RPT-2024-089");
        assert_eq!(ReportId::new(2025, 1999).to_string(), "RPT-2025-999");
    }

    #[test]
    fn generated_id_uses_the_current_year() {
        let now: Timestamp = "2024-06-01T12:00:00Z".parse().unwrap();
        assert!(ReportId::generate(now).to_string().starts_with("RPT-2024-"));
    }

    #[test]
    fn missing_issue_type_is_rejected_before_any_wait() {
        let delay = Immediate::default();
        let mut draft = complete_draft();
        draft.issue = None;

        let result =
            block_on(submit_report(&draft, &delay, Timestamp::now(), |_| {}));
        assert_eq!(result, Err(ReportError::MissingIssueType));
        assert_eq!(delay.waits(), 0);
    }

    #[test]
    fn missing_location_is_rejected_before_any_wait() {
        let delay = Immediate::default();
        let mut draft = complete_draft();
        draft.location = None;

        let mut phases = Vec::new();
        let result = block_on(submit_report(
            &draft,
            &delay,
            Timestamp::now(),
            |phase| phases.push(phase),
        ));
        assert_eq!(result, Err(ReportError::MissingLocation));
        assert_eq!(delay.waits(), 0);
        assert!(phases.is_empty());
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        let mut draft = complete_draft();
        draft.location = Some(LatLng::new(120.0, 30.0));
        assert_eq!(draft.validate(), Err(ReportError::InvalidCoordinate));
    }

    #[test]
    fn photo_must_be_an_image_under_the_limit() {
        let mut draft = complete_draft();
        draft.photo = Some(PhotoAttachment {
            name: "evidence.PNG".into(),
            size_bytes: 2_000_000,
        });
        assert!(draft.validate().is_ok());

        draft.photo = Some(PhotoAttachment {
            name: "evidence.gif".into(),
            size_bytes: 10,
        });
        assert_eq!(draft.validate(), Err(ReportError::UnsupportedPhoto));
    }

    #[test]
    fn valid_report_waits_once_and_mentions_its_id() {
        let delay = Immediate::default();
        let submitted = block_on(submit_report(
            &complete_draft(),
            &delay,
            Timestamp::now(),
            |_| {},
        ))
        .unwrap();

        assert_eq!(delay.waits(), 1);
        assert_eq!(submitted.report.details, "Pile of rubble by the road");
        let notice = submitted.notice.unwrap();
        assert!(notice.text.contains(&submitted.id.to_string()));
    }
}
