//! Seed data for every console collection.
//!
//! Fixture records use short sequential ids; records created at runtime get UUIDs.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::{
    Admin, Clan, Community, EthnicGroup, Event, EventCategory, Family, FamilyHistory,
    NewsArticle, Role, Status, SubClan, VerificationItem, VerificationKind, VerificationStatus,
};

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn ethnic_groups() -> Vec<EthnicGroup> {
    let rows = [
        ("Akan", "Ashanti & Central", 11_000_000, 8, "Matrilineal peoples of the forest belt"),
        ("Ewe", "Volta", 3_500_000, 5, "Patrilineal peoples east of the river"),
        ("Ga-Adangbe", "Greater Accra", 2_300_000, 4, "Coastal peoples of the Accra plains"),
        ("Mole-Dagbani", "Northern", 5_000_000, 6, "Savannah kingdoms of the north"),
        ("Guan", "Oti", 1_000_000, 3, "Early settlers along the river valleys"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, region, population, clans, description))| EthnicGroup {
            id: (i + 1).to_string(),
            name: name.to_string(),
            region: region.to_string(),
            description: text(description),
            population: Some(population),
            clans_count: clans,
            status: Status::Active,
            created_at: at(2024, 1, 10 + i as u32),
        })
        .collect()
}

pub fn clans() -> Vec<Clan> {
    let rows = [
        ("Oyoko", "Akan", "Falcon", 3, 42),
        ("Asona", "Akan", "Crow", 2, 35),
        ("Bretuo", "Akan", "Leopard", 2, 18),
        ("Agona", "Akan", "Parrot", 1, 12),
        ("Dzevi", "Ewe", "Dog", 2, 20),
        ("Lafe", "Ewe", "Tortoise", 1, 9),
        ("Asere", "Ga-Adangbe", "Lion", 2, 15),
        ("Gbewaa", "Mole-Dagbani", "Bull", 3, 27),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, group, totem, sub_clans, families))| Clan {
            id: (i + 1).to_string(),
            name: name.to_string(),
            ethnic_group: group.to_string(),
            totem: text(totem),
            description: None,
            sub_clans_count: sub_clans,
            families_count: families,
            status: if i == 3 { Status::Inactive } else { Status::Active },
            created_at: at(2024, 2, 1 + i as u32),
        })
        .collect()
}

pub fn sub_clans() -> Vec<SubClan> {
    let rows = [
        ("Oyoko Abohyen", "Oyoko", 14),
        ("Oyoko Atutue", "Oyoko", 16),
        ("Asona Adwumakase", "Asona", 11),
        ("Bretuo Afrane", "Bretuo", 9),
        ("Dzevi Anlo", "Dzevi", 12),
        ("Asere Kowe", "Asere", 8),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, clan, families))| SubClan {
            id: (i + 1).to_string(),
            name: name.to_string(),
            clan: clan.to_string(),
            description: None,
            families_count: families,
            status: Status::Active,
            created_at: at(2024, 2, 15 + i as u32),
        })
        .collect()
}

pub fn roles() -> Vec<Role> {
    let rows: [(&str, &str, &[&str], u32); 12] = [
        ("Super Admin", "Full access to every console screen", &["*:*"], 2),
        ("Content Manager", "Manages news and family histories", &["news:write", "histories:write"], 3),
        ("Clan Moderator", "Maintains clans and sub-clans", &["clans:write", "subclans:write"], 4),
        ("Family Registrar", "Registers and updates families", &["families:write"], 5),
        ("Event Coordinator", "Schedules community events", &["events:write"], 3),
        ("News Editor", "Edits and publishes news", &["news:write"], 2),
        ("Verification Officer", "Reviews the verification queue", &["verifications:review"], 2),
        ("Community Liaison", "Maintains community records", &["communities:write"], 4),
        ("Finance Officer", "Reviews payment settings", &["payments:read"], 1),
        ("Support Agent", "Answers member requests", &["members:read"], 6),
        ("Auditor", "Read-only access for audits", &["audit:read"], 1),
        ("Viewer", "Read-only dashboard access", &["dashboard:read"], 9),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, description, permissions, users))| Role {
            id: (i + 1).to_string(),
            name: name.to_string(),
            description: description.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            users_count: users,
            status: Status::Active,
            created_at: at(2023, 11, 1 + i as u32),
        })
        .collect()
}

pub fn admins() -> Vec<Admin> {
    let rows = [
        ("Kwame Mensah", "kwame.mensah@kinship.org", "Super Admin"),
        ("Ama Owusu", "ama.owusu@kinship.org", "Content Manager"),
        ("Kofi Agyeman", "kofi.agyeman@kinship.org", "Clan Moderator"),
        ("Esi Boateng", "esi.boateng@kinship.org", "Verification Officer"),
        ("Yaw Darko", "yaw.darko@kinship.org", "Support Agent"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, email, role))| Admin {
            id: (i + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            phone: None,
            status: if i == 4 { Status::Inactive } else { Status::Active },
            status_reason: if i == 4 { text("Left the organisation") } else { None },
            last_login: Some(at(2024, 6, 1 + i as u32)),
            created_at: at(2023, 10, 1 + i as u32),
        })
        .collect()
}

pub fn communities() -> Vec<Community> {
    let rows = [
        ("Kumasi Central", "Kumasi", "Nana Osei", 320),
        ("Ho Township", "Ho", "Togbe Kwasi", 210),
        ("Accra Diaspora Union", "Accra", "Naa Dedei", 540),
        ("Tamale North", "Tamale", "Alhassan Iddrisu", 180),
        ("London Heritage Circle", "London", "Abena Frimpong", 95),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, location, leader, members))| Community {
            id: (i + 1).to_string(),
            name: name.to_string(),
            location: location.to_string(),
            description: None,
            leader: text(leader),
            members_count: members,
            status: Status::Active,
            created_at: at(2024, 3, 1 + i as u32),
        })
        .collect()
}

pub fn events() -> Vec<Event> {
    let rows = [
        ("Akwasidae Festival", "Manhyia Palace, Kumasi", date(2024, 9, 22), EventCategory::Festival, 1200),
        ("Hogbetsotso Za", "Anloga", date(2024, 11, 2), EventCategory::Festival, 900),
        ("Clan Heads Assembly", "Accra", date(2024, 8, 14), EventCategory::Meeting, 60),
        ("Homowo Celebration", "Jamestown, Accra", date(2024, 8, 24), EventCategory::Festival, 1500),
        ("Outdooring of Baby Adjoa", "Cape Coast", date(2024, 7, 7), EventCategory::Naming, 45),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (title, location, on, category, attendees))| Event {
            id: (i + 1).to_string(),
            title: title.to_string(),
            description: None,
            location: location.to_string(),
            date: on,
            category,
            organizer: None,
            attendees_count: attendees,
            status: Status::Active,
            status_reason: None,
            created_at: at(2024, 5, 1 + i as u32),
        })
        .collect()
}

pub fn news() -> Vec<NewsArticle> {
    let rows = [
        ("Family tree archive opens", "Ama Owusu", "announcements"),
        ("Record turnout at Homowo", "Kofi Agyeman", "events"),
        ("New verification guidelines", "Esi Boateng", "announcements"),
        ("Oyoko clan history published", "Ama Owusu", "heritage"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (title, author, category))| NewsArticle {
            id: (i + 1).to_string(),
            title: title.to_string(),
            content: format!("{}. Read the full story in the member portal.", title),
            author: author.to_string(),
            category: category.to_string(),
            image_url: None,
            views_count: 100 * (i as u32 + 1),
            status: Status::Active,
            created_at: at(2024, 6, 10 + i as u32),
        })
        .collect()
}

pub fn families() -> Vec<Family> {
    let rows = [
        ("Mensah Family", "Kwame Mensah", "Oyoko", "Kumasi", 12),
        ("Owusu Family", "Yaw Owusu", "Asona", "Kumasi", 8),
        ("Agbeko Family", "Selorm Agbeko", "Dzevi", "Ho", 10),
        ("Tetteh Family", "Nii Tetteh", "Asere", "Accra", 7),
        ("Iddrisu Family", "Alhassan Iddrisu", "Gbewaa", "Tamale", 15),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, head, clan, location, members))| Family {
            id: (i + 1).to_string(),
            name: name.to_string(),
            head_of_family: head.to_string(),
            clan: clan.to_string(),
            sub_clan: None,
            location: text(location),
            members_count: members,
            status: Status::Active,
            created_at: at(2024, 4, 1 + i as u32),
        })
        .collect()
}

pub fn family_histories() -> Vec<FamilyHistory> {
    let rows = [
        ("From Bonwire to Kumasi", "Mensah Family", "Ama Owusu", "1850s"),
        ("The Agbeko migration", "Agbeko Family", "Selorm Agbeko", "1900s"),
        ("Keepers of the Asere stool", "Tetteh Family", "Nii Tetteh", "1820s"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (title, family, author, period))| FamilyHistory {
            id: (i + 1).to_string(),
            title: title.to_string(),
            family: family.to_string(),
            content: format!("{}: an account passed down through the generations.", title),
            author: author.to_string(),
            period: text(period),
            status: Status::Active,
            created_at: at(2024, 4, 20 + i as u32),
        })
        .collect()
}

pub fn verifications() -> Vec<VerificationItem> {
    let rows = [
        ("Owusu Family", VerificationKind::Family, "Yaw Owusu", VerificationStatus::Pending),
        ("Lafe clan lineage", VerificationKind::Clan, "Edem Kpodo", VerificationStatus::Pending),
        ("Abena Frimpong", VerificationKind::Membership, "Abena Frimpong", VerificationStatus::Pending),
        ("Keepers of the Asere stool", VerificationKind::FamilyHistory, "Nii Tetteh", VerificationStatus::Approved),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (subject, kind, submitted_by, status))| VerificationItem {
            id: (i + 1).to_string(),
            subject: subject.to_string(),
            kind,
            submitted_by: submitted_by.to_string(),
            details: None,
            documents: Vec::new(),
            status,
            rejection_reason: None,
            reviewed_at: status.is_terminal().then(|| at(2024, 6, 30)),
            created_at: at(2024, 6, 20 + i as u32),
        })
        .collect()
}
