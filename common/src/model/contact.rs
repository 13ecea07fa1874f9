use crate::forms::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inquiry types offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquirySubject {
    ProductInquiry,
    Quotation,
    TurnkeyProject,
    AfterSales,
    Technical,
    Partnership,
    Other,
}

impl InquirySubject {
    pub const ALL: [InquirySubject; 7] = [
        InquirySubject::ProductInquiry,
        InquirySubject::Quotation,
        InquirySubject::TurnkeyProject,
        InquirySubject::AfterSales,
        InquirySubject::Technical,
        InquirySubject::Partnership,
        InquirySubject::Other,
    ];

    /// Value used in the `<select>` and in serialized payloads.
    pub fn value(&self) -> &'static str {
        match self {
            InquirySubject::ProductInquiry => "product-inquiry",
            InquirySubject::Quotation => "quotation",
            InquirySubject::TurnkeyProject => "turnkey-project",
            InquirySubject::AfterSales => "after-sales",
            InquirySubject::Technical => "technical",
            InquirySubject::Partnership => "partnership",
            InquirySubject::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquirySubject::ProductInquiry => "Product Inquiry",
            InquirySubject::Quotation => "Request Quotation",
            InquirySubject::TurnkeyProject => "Turnkey Project",
            InquirySubject::AfterSales => "After Sales Support",
            InquirySubject::Technical => "Technical Support",
            InquirySubject::Partnership => "Partnership",
            InquirySubject::Other => "Other",
        }
    }
}

impl FromStr for InquirySubject {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquirySubject::ALL
            .into_iter()
            .find(|subject| subject.value() == s)
            .ok_or(())
    }
}

/// Contact form state. Lives only in the view; nothing stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: Option<InquirySubject>,
    pub message: String,
}

impl ContactInquiry {
    /// Presence check on the required fields. `company` is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.name, &self.email, &self.phone, &self.message];
        if required.iter().any(|field| field.trim().is_empty()) || self.subject.is_none() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactInquiry {
        ContactInquiry {
            name: "R. Patil".into(),
            email: "rp@example.com".into(),
            phone: "+91 9850123456".into(),
            company: String::new(),
            subject: Some(InquirySubject::Quotation),
            message: "Need a quote for a 500 TPD crystallizer".into(),
        }
    }

    #[test]
    fn company_is_optional() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut inquiry = filled();
        inquiry.phone = "   ".into();
        assert_eq!(inquiry.validate(), Err(ValidationError::MissingFields));

        let mut inquiry = filled();
        inquiry.subject = None;
        assert_eq!(inquiry.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn subject_values_round_trip_through_select_values() {
        for subject in InquirySubject::ALL {
            assert_eq!(subject.value().parse::<InquirySubject>(), Ok(subject));
        }
        assert!("sales".parse::<InquirySubject>().is_err());
    }
}
