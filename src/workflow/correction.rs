//! Attendance correction creation.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{HrError, HrResult};
use crate::models::{parse_date, AttendanceCorrection, Dataset, RequestStatus, User};

/// Caller-supplied payload for creating an attendance correction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCorrection {
    /// The day being corrected, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Corrected clock-in time.
    pub clock_in: Option<String>,
    /// Corrected clock-out time.
    pub clock_out: Option<String>,
    /// Break minutes, defaults to 0.
    pub break_minutes: Option<u32>,
    /// Overtime hours, defaults to 0.
    pub overtime_hours: Option<f64>,
    /// Reason for the correction.
    pub reason: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Creates an attendance correction owned by `actor` and appends it to the
/// dataset. Single-date record, so there is no range validation.
pub fn create_correction(
    data: &mut Dataset,
    actor: &User,
    input: &NewCorrection,
    now: DateTime<Utc>,
) -> HrResult<AttendanceCorrection> {
    let mut missing = Vec::new();
    for (name, value) in [
        ("date", &input.date),
        ("clock_in", &input.clock_in),
        ("clock_out", &input.clock_out),
        ("reason", &input.reason),
    ] {
        if present(value).is_none() {
            missing.push(name.to_string());
        }
    }
    if !missing.is_empty() {
        return Err(HrError::missing_fields(missing));
    }

    let date = parse_date(present(&input.date).unwrap_or_default())?;

    let item = AttendanceCorrection {
        id: super::generate_id("ac", now),
        user_id: actor.id.clone(),
        employee_name: actor.name.clone(),
        department: actor.department.clone(),
        date,
        clock_in: present(&input.clock_in).unwrap_or_default().to_string(),
        clock_out: present(&input.clock_out).unwrap_or_default().to_string(),
        break_minutes: input.break_minutes.unwrap_or(0),
        overtime_hours: input.overtime_hours.unwrap_or(0.0),
        reason: present(&input.reason).unwrap_or_default().to_string(),
        status: RequestStatus::Pending,
        approver_comment: String::new(),
        approved_by: String::new(),
        created_at: now,
    };
    data.attendance_corrections.push(item.clone());
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str) -> NewCorrection {
        NewCorrection {
            date: Some(date.to_string()),
            clock_in: Some("09:00".to_string()),
            clock_out: Some("18:00".to_string()),
            break_minutes: None,
            overtime_hours: None,
            reason: Some("Forgot to clock in".to_string()),
        }
    }

    #[test]
    fn test_create_defaults_break_and_overtime_to_zero() {
        let mut data = Dataset::seed();
        let actor = data.user("e001").unwrap().clone();

        let item = create_correction(&mut data, &actor, &input("2025-04-01"), Utc::now()).unwrap();

        assert_eq!(item.break_minutes, 0);
        assert_eq!(item.overtime_hours, 0.0);
        assert_eq!(item.status, RequestStatus::Pending);
        assert_eq!(data.attendance_corrections.len(), 1);
    }

    #[test]
    fn test_create_keeps_supplied_break_and_overtime() {
        let mut data = Dataset::seed();
        let actor = data.user("e001").unwrap().clone();

        let mut payload = input("2025-04-01");
        payload.break_minutes = Some(45);
        payload.overtime_hours = Some(2.5);

        let item = create_correction(&mut data, &actor, &payload, Utc::now()).unwrap();
        assert_eq!(item.break_minutes, 45);
        assert_eq!(item.overtime_hours, 2.5);
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let mut data = Dataset::seed();
        let actor = data.user("e001").unwrap().clone();

        let err =
            create_correction(&mut data, &actor, &NewCorrection::default(), Utc::now())
                .unwrap_err();
        match err {
            HrError::Validation { fields, .. } => {
                assert_eq!(fields, vec!["date", "clock_in", "clock_out", "reason"]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let mut data = Dataset::seed();
        let actor = data.user("e001").unwrap().clone();

        let err = create_correction(&mut data, &actor, &input("April 1st"), Utc::now())
            .unwrap_err();
        assert!(matches!(err, HrError::Validation { .. }));
        assert!(data.attendance_corrections.is_empty());
    }

    #[test]
    fn test_owner_stamped_from_actor() {
        let mut data = Dataset::seed();
        let actor = data.user("m002").unwrap().clone();

        let item = create_correction(&mut data, &actor, &input("2025-04-01"), Utc::now()).unwrap();
        assert_eq!(item.user_id, "m002");
        assert_eq!(item.employee_name, "Ryo Watanabe");
        assert_eq!(item.department, "Engineering");
    }
}
