//! Contact field keys.
//!
//! A caller picks a [`KeySet`] and asks its store for the fields listed by
//! [`key_descriptors`] before handing records to the sectioner. This is plain
//! configuration data; nothing here inspects a record.

use rolodex_core::types::KeySet;

/// A contact field a store can be asked to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKey {
    Identifier,
    ContactType,
    NamePrefix,
    GivenName,
    MiddleName,
    FamilyName,
    PreviousFamilyName,
    NameSuffix,
    Nickname,
    PhoneticGivenName,
    PhoneticMiddleName,
    PhoneticFamilyName,
    PhoneticOrganizationName,
    OrganizationName,
    DepartmentName,
    JobTitle,
    PhoneNumbers,
    EmailAddresses,
    PostalAddresses,
    UrlAddresses,
    InstantMessageAddresses,
    SocialProfiles,
    Relations,
    Dates,
    Birthday,
    NonGregorianBirthday,
    ImageDataAvailable,
    ImageData,
    ThumbnailImageData,
    ContainerType,
    ContainerName,
    ContainerIdentifier,
}

impl ContactKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::ContactType => "contactType",
            Self::NamePrefix => "namePrefix",
            Self::GivenName => "givenName",
            Self::MiddleName => "middleName",
            Self::FamilyName => "familyName",
            Self::PreviousFamilyName => "previousFamilyName",
            Self::NameSuffix => "nameSuffix",
            Self::Nickname => "nickname",
            Self::PhoneticGivenName => "phoneticGivenName",
            Self::PhoneticMiddleName => "phoneticMiddleName",
            Self::PhoneticFamilyName => "phoneticFamilyName",
            Self::PhoneticOrganizationName => "phoneticOrganizationName",
            Self::OrganizationName => "organizationName",
            Self::DepartmentName => "departmentName",
            Self::JobTitle => "jobTitle",
            Self::PhoneNumbers => "phoneNumbers",
            Self::EmailAddresses => "emailAddresses",
            Self::PostalAddresses => "postalAddresses",
            Self::UrlAddresses => "urlAddresses",
            Self::InstantMessageAddresses => "instantMessageAddresses",
            Self::SocialProfiles => "socialProfiles",
            Self::Relations => "contactRelations",
            Self::Dates => "dates",
            Self::Birthday => "birthday",
            Self::NonGregorianBirthday => "nonGregorianBirthday",
            Self::ImageDataAvailable => "imageDataAvailable",
            Self::ImageData => "imageData",
            Self::ThumbnailImageData => "thumbnailImageData",
            Self::ContainerType => "containerType",
            Self::ContainerName => "containerName",
            Self::ContainerIdentifier => "containerIdentifier",
        }
    }
}

impl std::fmt::Display for ContactKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys required to format a contact's full name.
pub const FULL_NAME_KEYS: &[ContactKey] = &[
    ContactKey::NamePrefix,
    ContactKey::GivenName,
    ContactKey::MiddleName,
    ContactKey::FamilyName,
    ContactKey::NameSuffix,
    ContactKey::PhoneticGivenName,
    ContactKey::PhoneticMiddleName,
    ContactKey::PhoneticFamilyName,
];

/// Keys for rendering a picker row.
pub const BASIC_DISPLAY_KEYS: &[ContactKey] = &[
    ContactKey::Identifier,
    ContactKey::FamilyName,
    ContactKey::GivenName,
    ContactKey::ImageDataAvailable,
    ContactKey::ImageData,
    ContactKey::ThumbnailImageData,
    ContactKey::EmailAddresses,
    ContactKey::PhoneNumbers,
    ContactKey::OrganizationName,
];

/// Every key a store can provide.
pub const ALL_KEYS: &[ContactKey] = &[
    ContactKey::Identifier,
    ContactKey::ContactType,
    ContactKey::Dates,
    ContactKey::UrlAddresses,
    ContactKey::ContainerType,
    ContactKey::ContainerName,
    ContactKey::ContainerIdentifier,
    ContactKey::Relations,
    ContactKey::SocialProfiles,
    ContactKey::PhoneticOrganizationName,
    ContactKey::InstantMessageAddresses,
    ContactKey::GivenName,
    ContactKey::MiddleName,
    ContactKey::FamilyName,
    ContactKey::PreviousFamilyName,
    ContactKey::PostalAddresses,
    ContactKey::PhoneNumbers,
    ContactKey::NameSuffix,
    ContactKey::Nickname,
    ContactKey::OrganizationName,
    ContactKey::DepartmentName,
    ContactKey::JobTitle,
    ContactKey::PhoneticGivenName,
    ContactKey::PhoneticFamilyName,
    ContactKey::PhoneticMiddleName,
    ContactKey::ImageDataAvailable,
    ContactKey::ImageData,
    ContactKey::ThumbnailImageData,
    ContactKey::EmailAddresses,
    ContactKey::Birthday,
    ContactKey::NonGregorianBirthday,
];

/// ## Summary
/// Returns the keys to request for `set`, followed by any full-name keys the
/// set does not already contain. Each key appears once.
#[must_use]
pub fn key_descriptors(set: KeySet) -> Vec<ContactKey> {
    let base = match set {
        KeySet::BasicDisplay => BASIC_DISPLAY_KEYS,
        KeySet::All => ALL_KEYS,
    };

    let mut keys = base.to_vec();
    for key in FULL_NAME_KEYS {
        if !keys.contains(key) {
            keys.push(*key);
        }
    }
    keys
}
