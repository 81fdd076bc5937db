use serde::Serialize;
use uuid::{Uuid, uuid};

/// Static configuration for one bookable club.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub club_id: Uuid,
    pub activity_id: Uuid,
    pub base_url: &'static str,
    pub booking_url: &'static str,
}

/// All clubs known to the checker, in declaration order.
///
/// Built once at startup; the first entry doubles as the default club for
/// endpoints that take an optional club key.
pub struct ClubRegistry {
    clubs: Vec<ClubConfig>,
}

impl ClubRegistry {
    pub fn new(clubs: Vec<ClubConfig>) -> Self {
        Self { clubs }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            ClubConfig {
                id: "mouratoglou",
                name: "Mouratoglou Country Club",
                club_id: uuid!("652b9a65-0756-4f08-9b30-e20130aeea42"),
                activity_id: uuid!("700a126b-59e1-4f94-8931-0c87483c6f10"),
                base_url: "https://api-blockout.doinsport.club/clubs/playgrounds/plannings/",
                booking_url: "https://mouratogloucc.doinsport.club/select-booking",
            },
            ClubConfig {
                id: "allinpadel",
                name: "All In Padel Mougins",
                club_id: uuid!("76eab5bf-ac6d-4fd3-84fc-0ec862242e6e"),
                activity_id: uuid!("ce8c306e-224a-4f24-aa9d-6500580924dc"),
                base_url: "https://allin-api.doinsport.club/clubs/playgrounds/plannings/",
                booking_url: "https://allinpadel.doinsport.club/select-booking",
            },
            ClubConfig {
                id: "stadiumantibes",
                name: "Stadium-Antibes",
                club_id: uuid!("c8e997d2-303d-4fb3-988a-bbb0640643cd"),
                activity_id: uuid!("ce8c306e-224a-4f24-aa9d-6500580924dc"),
                base_url: "https://api-v3.doinsport.club/clubs/playgrounds/plannings/",
                booking_url: "https://stadium-antibes.doinsport.club/select-booking",
            },
            ClubConfig {
                id: "padelriviera",
                name: "Padel Riviera",
                club_id: uuid!("5b3a0eb9-3565-4fc5-abd3-928f7f46dc14"),
                activity_id: uuid!("ce8c306e-224a-4f24-aa9d-6500580924dc"),
                base_url: "https://api-v3.doinsport.club/clubs/playgrounds/plannings/",
                booking_url: "https://padelriviera.doinsport.club/select-booking",
            },
        ])
    }

    /// Look up a club by its registry key.
    pub fn get(&self, key: &str) -> Option<&ClubConfig> {
        self.clubs.iter().find(|club| club.id == key)
    }

    pub fn default_club(&self) -> Option<&ClubConfig> {
        self.clubs.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClubConfig> {
        self.clubs.iter()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.clubs.iter().map(|club| club.id).collect()
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }
}
