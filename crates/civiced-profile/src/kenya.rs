//! Kenya reference data
//!
//! County and constituency names consumed during registration, plus the
//! school-form bracket mapping used to place a learner by age.

/// The 47 counties established by the 2010 Constitution.
pub const KENYAN_COUNTIES: [&str; 47] = [
    "Baringo",
    "Bomet",
    "Bungoma",
    "Busia",
    "Elgeyo-Marakwet",
    "Embu",
    "Garissa",
    "Homa Bay",
    "Isiolo",
    "Kajiado",
    "Kakamega",
    "Kericho",
    "Kiambu",
    "Kilifi",
    "Kirinyaga",
    "Kisii",
    "Kisumu",
    "Kitui",
    "Kwale",
    "Laikipia",
    "Lamu",
    "Machakos",
    "Makueni",
    "Mandera",
    "Marsabit",
    "Meru",
    "Migori",
    "Mombasa",
    "Murang'a",
    "Nairobi",
    "Nakuru",
    "Nandi",
    "Narok",
    "Nyamira",
    "Nyandarua",
    "Nyeri",
    "Samburu",
    "Siaya",
    "Taita-Taveta",
    "Tana River",
    "Tharaka-Nithi",
    "Trans Nzoia",
    "Turkana",
    "Uasin Gishu",
    "Vihiga",
    "Wajir",
    "West Pokot",
];

/// Constituency lists for the counties the platform launched in.
const COUNTY_CONSTITUENCIES: &[(&str, &[&str])] = &[
    (
        "Nairobi",
        &[
            "Starehe",
            "Westlands",
            "Dagoretti North",
            "Langata",
            "Kasarani",
        ],
    ),
    (
        "Mombasa",
        &["Mvita", "Changamwe", "Jomba", "Kisauni", "Nyali", "Likoni"],
    ),
    (
        "Kisumu",
        &[
            "Kisumu East",
            "Kisumu West",
            "Kisumu Central",
            "Muhoroni",
            "Nyando",
        ],
    ),
    (
        "Nakuru",
        &[
            "Nakuru Town East",
            "Nakuru Town West",
            "Bahati",
            "Subukia",
            "Rongai",
        ],
    ),
];

pub fn is_kenyan_county(name: &str) -> bool {
    KENYAN_COUNTIES.contains(&name)
}

/// Constituencies on record for a county, if the platform has them.
pub fn constituencies_for(county: &str) -> Option<&'static [&'static str]> {
    COUNTY_CONSTITUENCIES
        .iter()
        .find(|(name, _)| *name == county)
        .map(|(_, list)| *list)
}

/// The constituency a new registration is placed in: the first on record
/// for the county, or "Central" where no list exists yet.
pub fn default_constituency(county: &str) -> &'static str {
    constituencies_for(county)
        .and_then(|list| list.first())
        .copied()
        .unwrap_or("Central")
}

/// Placeholder school name until the learner picks their own.
pub fn default_school(county: &str) -> String {
    format!("{} School", county)
}

/// Map an age to a secondary-school form bracket.
pub fn grade_for_age(age: u32) -> &'static str {
    if age <= 14 {
        "Form 1-2"
    } else if age <= 16 {
        "Form 3"
    } else {
        "Form 4"
    }
}

/// Derive a display name from the local part of an email address:
/// letters and spaces only, each word title-cased.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");

    let mut name = String::with_capacity(local.len());
    let mut at_word_start = true;
    for c in local.chars() {
        if c.is_ascii_alphabetic() {
            if at_word_start {
                name.extend(c.to_uppercase());
                at_word_start = false;
            } else {
                name.push(c);
            }
        } else if c == ' ' {
            name.push(' ');
            at_word_start = true;
        }
        // Digits and punctuation are dropped
    }
    name
}
