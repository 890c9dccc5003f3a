/// Data models for database entities
///
/// Maps the `members` table. Field names match column names, so the
/// mapping between form fields and columns is spelled out in one place.

use crate::form::MemberField;
use serde::Serialize;
use sqlx::FromRow;

/// Every column of the `members` table, in table order
pub const MEMBER_COLUMNS: [&str; 21] = [
    "id",
    "surname",
    "full_name",
    "dob",
    "gender",
    "address",
    "city",
    "state",
    "postal_code",
    "phone",
    "email",
    "children",
    "marital_status",
    "interests",
    "salvation_date",
    "baptism_date",
    "previous_church",
    "previous_church_location",
    "ministry",
    "prayer_requests",
    "registration_date",
];

/// A stored member record
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Member {
    pub id: i64,
    pub surname: String,
    pub full_name: String,
    pub dob: String,
    pub gender: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub children: String,
    pub marital_status: String,
    pub interests: String,
    pub salvation_date: String,
    pub baptism_date: String,
    pub previous_church: String,
    pub previous_church_location: String,
    pub ministry: String,
    pub prayer_requests: String,
    pub registration_date: String, // YYYY-MM-DD HH:MM:SS, local time
}

impl Member {
    /// Column name and value pairs, in table order
    pub fn columns(&self) -> Vec<(&'static str, String)> {
        MEMBER_COLUMNS
            .iter()
            .map(|name| {
                let value = match *name {
                    "id" => self.id.to_string(),
                    "registration_date" => self.registration_date.clone(),
                    column => MemberField::ALL
                        .iter()
                        .find(|field| field.column() == column)
                        .map(|field| self.input_value(*field).to_string())
                        .unwrap_or_default(),
                };
                (*name, value)
            })
            .collect()
    }

    /// Value stored for a form field
    pub fn input_value(&self, field: MemberField) -> &str {
        match field {
            MemberField::Surname => &self.surname,
            MemberField::FullName => &self.full_name,
            MemberField::DateOfBirth => &self.dob,
            MemberField::Gender => &self.gender,
            MemberField::StreetAddress => &self.address,
            MemberField::City => &self.city,
            MemberField::State => &self.state,
            MemberField::PostalCode => &self.postal_code,
            MemberField::PhoneNumber => &self.phone,
            MemberField::Email => &self.email,
            MemberField::Children => &self.children,
            MemberField::MaritalStatus => &self.marital_status,
            MemberField::AreasOfInterest => &self.interests,
            MemberField::MinistryInvolvement => &self.ministry,
            MemberField::DateOfSalvation => &self.salvation_date,
            MemberField::DateOfBaptism => &self.baptism_date,
            MemberField::PreviousChurch => &self.previous_church,
            MemberField::PreviousChurchLocation => &self.previous_church_location,
            MemberField::PrayerRequests => &self.prayer_requests,
        }
    }
}

/// Input for registering a new member
///
/// Carries no id and no timestamp; the store assigns both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemberInput {
    pub surname: String,
    pub full_name: String,
    pub dob: String,
    pub gender: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub children: String,
    pub marital_status: String,
    pub interests: String,
    pub salvation_date: String,
    pub baptism_date: String,
    pub previous_church: String,
    pub previous_church_location: String,
    pub ministry: String,
    pub prayer_requests: String,
}

impl MemberInput {
    pub fn get(&self, field: MemberField) -> &str {
        self.slot(field)
    }

    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot(&self, field: MemberField) -> &String {
        match field {
            MemberField::Surname => &self.surname,
            MemberField::FullName => &self.full_name,
            MemberField::DateOfBirth => &self.dob,
            MemberField::Gender => &self.gender,
            MemberField::StreetAddress => &self.address,
            MemberField::City => &self.city,
            MemberField::State => &self.state,
            MemberField::PostalCode => &self.postal_code,
            MemberField::PhoneNumber => &self.phone,
            MemberField::Email => &self.email,
            MemberField::Children => &self.children,
            MemberField::MaritalStatus => &self.marital_status,
            MemberField::AreasOfInterest => &self.interests,
            MemberField::MinistryInvolvement => &self.ministry,
            MemberField::DateOfSalvation => &self.salvation_date,
            MemberField::DateOfBaptism => &self.baptism_date,
            MemberField::PreviousChurch => &self.previous_church,
            MemberField::PreviousChurchLocation => &self.previous_church_location,
            MemberField::PrayerRequests => &self.prayer_requests,
        }
    }

    fn slot_mut(&mut self, field: MemberField) -> &mut String {
        match field {
            MemberField::Surname => &mut self.surname,
            MemberField::FullName => &mut self.full_name,
            MemberField::DateOfBirth => &mut self.dob,
            MemberField::Gender => &mut self.gender,
            MemberField::StreetAddress => &mut self.address,
            MemberField::City => &mut self.city,
            MemberField::State => &mut self.state,
            MemberField::PostalCode => &mut self.postal_code,
            MemberField::PhoneNumber => &mut self.phone,
            MemberField::Email => &mut self.email,
            MemberField::Children => &mut self.children,
            MemberField::MaritalStatus => &mut self.marital_status,
            MemberField::AreasOfInterest => &mut self.interests,
            MemberField::MinistryInvolvement => &mut self.ministry,
            MemberField::DateOfSalvation => &mut self.salvation_date,
            MemberField::DateOfBaptism => &mut self.baptism_date,
            MemberField::PreviousChurch => &mut self.previous_church,
            MemberField::PreviousChurchLocation => &mut self.previous_church_location,
            MemberField::PrayerRequests => &mut self.prayer_requests,
        }
    }

    /// True if nothing was filled in
    pub fn is_blank(&self) -> bool {
        MemberField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member() -> Member {
        Member {
            id: 7,
            surname: "Doe".to_string(),
            full_name: "Jane Doe".to_string(),
            dob: "1990-04-01".to_string(),
            gender: "Female".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            phone: "555-0100".to_string(),
            email: "jane@x.com".to_string(),
            children: "2".to_string(),
            marital_status: "Married".to_string(),
            interests: "Choir".to_string(),
            salvation_date: "2005-06-12".to_string(),
            baptism_date: "".to_string(),
            previous_church: "Grace Chapel".to_string(),
            previous_church_location: "Peoria, IL".to_string(),
            ministry: "Adult".to_string(),
            prayer_requests: "Health".to_string(),
            registration_date: "2024-01-02 03:04:05".to_string(),
        }
    }

    #[test]
    fn test_columns_follow_table_order() {
        let member = sample_member();
        let names: Vec<_> = member.columns().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, MEMBER_COLUMNS.to_vec());
    }

    #[test]
    fn test_columns_carry_values() {
        let member = sample_member();
        let columns = member.columns();
        assert_eq!(columns[0], ("id", "7".to_string()));
        assert!(columns.contains(&("ministry", "Adult".to_string())));
        assert!(columns.contains(&("interests", "Choir".to_string())));
        assert_eq!(
            columns.last(),
            Some(&("registration_date", "2024-01-02 03:04:05".to_string()))
        );
    }

    #[test]
    fn test_input_set_and_get() {
        let mut input = MemberInput::default();
        assert!(input.is_blank());

        input.set(MemberField::PreviousChurchLocation, "Peoria, IL");
        input.set(MemberField::MinistryInvolvement, "Youth");

        assert_eq!(input.previous_church_location, "Peoria, IL");
        assert_eq!(input.ministry, "Youth");
        assert_eq!(input.get(MemberField::MinistryInvolvement), "Youth");
        assert!(!input.is_blank());
    }

    #[test]
    fn test_member_and_input_agree_on_columns() {
        let member = sample_member();
        for field in MemberField::ALL {
            let value = member.input_value(field);
            let from_columns = member
                .columns()
                .into_iter()
                .find(|(name, _)| *name == field.column())
                .map(|(_, v)| v);
            assert_eq!(from_columns.as_deref(), Some(value), "column for {}", field);
        }
    }
}
