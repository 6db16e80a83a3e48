//! Contact list.
use super::{args, Termux, TermuxError};
use serde::{Deserialize, Serialize};

/// One entry of `termux-contact-list`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Contact {
    #[allow(missing_docs)]
    pub name: String,
    #[allow(missing_docs)]
    pub number: String,
}

impl Termux {
    /// All contacts of the device.
    pub fn contact_list(&self) -> Result<Vec<Contact>, TermuxError> {
        self.invoke_json("termux-contact-list", args![])
    }
}

#[cfg(test)]
mod should {
    use crate::api::testing::expecting;
    use crate::diagnostics::{MockDiagnostics, OrReport};

    #[test]
    fn decode_contacts() {
        let termux = expecting(
            "termux-contact-list",
            &[],
            r#"[{"name":"Alice","number":"+33 6 00 00 00 01"},{"name":"Bob","number":"555"}]"#,
        );
        let contacts = termux.contact_list().unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].name, "Bob");
    }

    #[test]
    fn fall_back_to_empty_list() {
        let termux = expecting("termux-contact-list", &[], "Permission denied");
        let mut diagnostics = MockDiagnostics::new();
        diagnostics.expect_report().times(1).return_const(());
        assert!(termux.contact_list().or_report(&diagnostics).is_empty());
    }
}
