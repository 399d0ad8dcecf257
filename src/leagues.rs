//! Static league and roster reference data.
//!
//! Everything here is read-only and lives for the whole process. Team lists
//! are ordered the way the UI presents them. The recent-form table is an
//! illustrative placeholder consumed by the mock resolution path; real form
//! data would come from the remote scoring backend.

use serde::Serialize;

use crate::predict::types::{FormOutcome, FormSequence};

/// A league with its ordered team roster.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct League {
    pub id: &'static str,
    pub name: &'static str,
    pub teams: &'static [&'static str],
}

const PREMIER: &[&str] = &[
    "Arsenal",
    "Aston Villa",
    "Bournemouth",
    "Brentford",
    "Brighton",
    "Chelsea",
    "Crystal Palace",
    "Everton",
    "Fulham",
    "Ipswich Town",
    "Leicester City",
    "Liverpool",
    "Manchester City",
    "Manchester United",
    "Newcastle United",
    "Nottingham Forest",
    "Southampton",
    "Tottenham",
    "West Ham",
    "Wolves",
];

const EKSTRAKLASA: &[&str] = &[
    "Legia Warszawa",
    "Lech Poznań",
    "Raków Częstochowa",
    "Pogoń Szczecin",
    "Jagiellonia Białystok",
    "Śląsk Wrocław",
    "Górnik Zabrze",
    "Cracovia",
    "Piast Gliwice",
    "Radomiak Radom",
    "Warta Poznań",
    "Zagłębie Lubin",
    "Korona Kielce",
    "Stal Mielec",
    "Ruch Chorzów",
    "Widzew Łódź",
];

/// All leagues, in presentation order.
pub const LEAGUES: &[League] = &[
    League {
        id: "premier",
        name: "Premier League",
        teams: PREMIER,
    },
    League {
        id: "ekstraklasa",
        name: "Ekstraklasa",
        teams: EKSTRAKLASA,
    },
];

/// Look up a league by its id.
pub fn find_league(id: &str) -> Option<&'static League> {
    LEAGUES.iter().find(|l| l.id == id)
}

use FormOutcome::{D, L, W};

/// Illustrative recent form, most-recent-first. Not every team has an entry,
/// and sequences may be shorter than five matches.
const RECENT_FORM: &[(&str, &[FormOutcome])] = &[
    ("Arsenal", &[W, W, D, L, W]),
    ("Chelsea", &[L, D, W, W, L]),
    ("Liverpool", &[W, W, W, D, W]),
    ("Manchester City", &[W, D, W, W, W]),
    ("Manchester United", &[D, L, W, D, L]),
    ("Tottenham", &[L, W, L, W, D]),
    ("Newcastle United", &[W, D, D, W, L]),
    ("Ipswich Town", &[L, L]),
    ("Legia Warszawa", &[D, W, L, W, D]),
    ("Lech Poznań", &[W, L, L, D, W]),
    ("Raków Częstochowa", &[W, W, L, D, D]),
    ("Widzew Łódź", &[L, D]),
];

/// Recent form for a team when the catalog has it.
pub fn recent_form(team: &str) -> Option<FormSequence> {
    RECENT_FORM
        .iter()
        .find(|(name, _)| *name == team)
        .map(|(_, seq)| seq.to_vec())
}
