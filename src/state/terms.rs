use serde::{Deserialize, Serialize};

/// One agreement checkbox on the terms step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    TosRequired,
    PrivacyRequired,
    SmsOptional,
    MarketingOptional,
}

impl Term {
    pub fn all() -> Vec<Term> {
        vec![
            Term::TosRequired,
            Term::PrivacyRequired,
            Term::SmsOptional,
            Term::MarketingOptional,
        ]
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Term::TosRequired | Term::PrivacyRequired)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Term::TosRequired => "[필수] 서비스 이용약관 동의",
            Term::PrivacyRequired => "[필수] 개인정보 수집 및 이용 동의",
            Term::SmsOptional => "[선택] SMS 수신 동의",
            Term::MarketingOptional => "[선택] 마케팅 정보 수신 동의",
        }
    }
}

/// Agreement flags. "Select all" is derived on every read, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsState {
    pub tos_required: bool,
    pub privacy_required: bool,
    pub sms_optional: bool,
    pub marketing_optional: bool,
}

impl TermsState {
    pub fn get(&self, term: Term) -> bool {
        match term {
            Term::TosRequired => self.tos_required,
            Term::PrivacyRequired => self.privacy_required,
            Term::SmsOptional => self.sms_optional,
            Term::MarketingOptional => self.marketing_optional,
        }
    }

    fn flag_mut(&mut self, term: Term) -> &mut bool {
        match term {
            Term::TosRequired => &mut self.tos_required,
            Term::PrivacyRequired => &mut self.privacy_required,
            Term::SmsOptional => &mut self.sms_optional,
            Term::MarketingOptional => &mut self.marketing_optional,
        }
    }

    pub fn all(&self) -> bool {
        self.tos_required && self.privacy_required && self.sms_optional && self.marketing_optional
    }

    pub fn toggle(&mut self, term: Term) {
        let flag = self.flag_mut(term);
        *flag = !*flag;
    }

    /// Sets every flag to the negation of the current "select all" value.
    pub fn toggle_all(&mut self) {
        self.set_all(!self.all());
    }

    pub fn set_all(&mut self, value: bool) {
        for term in Term::all() {
            *self.flag_mut(term) = value;
        }
    }

    pub fn required_accepted(&self) -> bool {
        self.tos_required && self.privacy_required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_toggles_drive_all() {
        let mut terms = TermsState::default();
        for term in Term::all() {
            assert!(!terms.all());
            terms.toggle(term);
        }
        assert!(terms.all());

        terms.toggle(Term::SmsOptional);
        assert!(!terms.all());
        assert!(terms.tos_required && terms.privacy_required && terms.marketing_optional);
    }

    #[test]
    fn test_toggle_all_sets_every_flag() {
        let mut terms = TermsState::default();
        terms.toggle(Term::TosRequired);
        terms.toggle_all();
        assert!(Term::all().into_iter().all(|t| terms.get(t)));

        terms.toggle_all();
        assert!(Term::all().into_iter().all(|t| !terms.get(t)));
    }

    #[test]
    fn test_required_flags_ignore_optional_ones() {
        let mut terms = TermsState::default();
        terms.toggle(Term::TosRequired);
        assert!(!terms.required_accepted());
        terms.toggle(Term::PrivacyRequired);
        assert!(terms.required_accepted());
        assert!(!terms.all());
    }
}
