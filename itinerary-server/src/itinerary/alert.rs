//! Service alerts attached to legs.

use crate::otp::OtpAlert;

/// Read-only view of one service disruption notice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegAlert<'a> {
    raw: &'a OtpAlert,
}

impl<'a> LegAlert<'a> {
    pub fn new(raw: &'a OtpAlert) -> Self {
        Self { raw }
    }

    pub fn header_text(&self) -> &'a str {
        &self.raw.alert_header_text
    }

    pub fn description_text(&self) -> &'a str {
        &self.raw.alert_description_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_texts() {
        let raw = OtpAlert {
            alert_header_text: "Elevator outage".into(),
            alert_description_text: "Use the ramp on 3rd Ave".into(),
        };
        let alert = LegAlert::new(&raw);

        assert_eq!(alert.header_text(), "Elevator outage");
        assert_eq!(alert.description_text(), "Use the ramp on 3rd Ave");
    }
}
