/// Static form field descriptors
///
/// Every input the registration form shows is listed here once, together with
/// the column it is stored in. Nothing in this file is user-configurable.

/// Hint shown in empty date fields. Never stored.
pub const DATE_HINT: &str = "YYYY-MM-DD";

const GENDERS: &[&str] = &["Male", "Female", "Other"];
const MARITAL_STATUSES: &[&str] = &["Single", "Married", "Divorced", "Widowed"];
// Single select, even though the label reads plural
const INTERESTS: &[&str] = &["Choir", "Teaching", "Ushering", "Music", "Outreach"];
const MINISTRIES: &[&str] = &["Children", "Youth", "Young Adult", "Adult"];

/// What kind of input a field takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line free text
    Text,
    /// Free text spanning several lines
    MultiLine,
    /// Exactly one entry from a fixed list, or nothing
    Choice(&'static [&'static str]),
}

/// Every input on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Surname,
    FullName,
    DateOfBirth,
    Gender,
    StreetAddress,
    City,
    State,
    PostalCode,
    PhoneNumber,
    Email,
    Children,
    MaritalStatus,
    AreasOfInterest,
    MinistryInvolvement,
    DateOfSalvation,
    DateOfBaptism,
    PreviousChurch,
    PreviousChurchLocation,
    PrayerRequests,
}

/// Descriptor for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: MemberField,
    pub label: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
    pub is_date: bool,
}

impl MemberField {
    /// All fields in form order, tab by tab
    pub const ALL: [MemberField; 19] = [
        MemberField::Surname,
        MemberField::FullName,
        MemberField::DateOfBirth,
        MemberField::Gender,
        MemberField::StreetAddress,
        MemberField::City,
        MemberField::State,
        MemberField::PostalCode,
        MemberField::PhoneNumber,
        MemberField::Email,
        MemberField::Children,
        MemberField::MaritalStatus,
        MemberField::AreasOfInterest,
        MemberField::MinistryInvolvement,
        MemberField::DateOfSalvation,
        MemberField::DateOfBaptism,
        MemberField::PreviousChurch,
        MemberField::PreviousChurchLocation,
        MemberField::PrayerRequests,
    ];

    /// Label, column and input kind of this field
    pub fn descriptor(self) -> FieldDescriptor {
        use FieldKind::*;

        let (label, column, kind) = match self {
            MemberField::Surname => ("Surname", "surname", Text),
            MemberField::FullName => ("Full Name", "full_name", Text),
            MemberField::DateOfBirth => ("Date of Birth", "dob", Text),
            MemberField::Gender => ("Gender", "gender", Choice(GENDERS)),
            MemberField::StreetAddress => ("Street Address", "address", Text),
            MemberField::City => ("City", "city", Text),
            MemberField::State => ("State", "state", Text),
            MemberField::PostalCode => ("Postal Code", "postal_code", Text),
            MemberField::PhoneNumber => ("Phone Number", "phone", Text),
            MemberField::Email => ("Email", "email", Text),
            MemberField::Children => ("Children", "children", Text),
            MemberField::MaritalStatus => ("Marital Status", "marital_status", Choice(MARITAL_STATUSES)),
            MemberField::AreasOfInterest => ("Areas of Interest", "interests", Choice(INTERESTS)),
            MemberField::MinistryInvolvement => ("Ministry Involvement", "ministry", Choice(MINISTRIES)),
            MemberField::DateOfSalvation => ("Date of Salvation", "salvation_date", Text),
            MemberField::DateOfBaptism => ("Date of Baptism", "baptism_date", Text),
            MemberField::PreviousChurch => ("Previous Church", "previous_church", Text),
            MemberField::PreviousChurchLocation => {
                ("Previous Church City/State", "previous_church_location", Text)
            }
            MemberField::PrayerRequests => ("Prayer Requests", "prayer_requests", MultiLine),
        };

        FieldDescriptor {
            field: self,
            label,
            column,
            kind,
            is_date: self.is_date(),
        }
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn column(self) -> &'static str {
        self.descriptor().column
    }

    pub fn kind(self) -> FieldKind {
        self.descriptor().kind
    }

    /// Date fields get the `YYYY-MM-DD` hint treatment
    pub fn is_date(self) -> bool {
        matches!(
            self,
            MemberField::DateOfBirth | MemberField::DateOfSalvation | MemberField::DateOfBaptism
        )
    }
}

impl std::fmt::Display for MemberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The sections of the application, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    MemberInfo,
    ChurchHistory,
    PrayerRequests,
    Search,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::MemberInfo, Tab::ChurchHistory, Tab::PrayerRequests, Tab::Search];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::MemberInfo => "1 • Member Info",
            Tab::ChurchHistory => "2 • Church History",
            Tab::PrayerRequests => "3 • Prayer Requests",
            Tab::Search => "🔍 Search",
        }
    }

    /// Fields shown on this tab, in display order
    pub fn fields(&self) -> &'static [MemberField] {
        match self {
            Tab::MemberInfo => &[
                MemberField::Surname,
                MemberField::FullName,
                MemberField::DateOfBirth,
                MemberField::Gender,
                MemberField::StreetAddress,
                MemberField::City,
                MemberField::State,
                MemberField::PostalCode,
                MemberField::PhoneNumber,
                MemberField::Email,
                MemberField::Children,
                MemberField::MaritalStatus,
                MemberField::AreasOfInterest,
                MemberField::MinistryInvolvement,
            ],
            Tab::ChurchHistory => &[
                MemberField::DateOfSalvation,
                MemberField::DateOfBaptism,
                MemberField::PreviousChurch,
                MemberField::PreviousChurchLocation,
            ],
            Tab::PrayerRequests => &[MemberField::PrayerRequests],
            Tab::Search => &[],
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
