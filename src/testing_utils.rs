use crate::formation::Position;
use crate::roster::PlayerRecord;

/// Test utilities for creating player pools and roster pages
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a player record
    pub fn create_player(
        id: u64,
        name: &str,
        positions: &[Position],
        rating: u8,
        age: u8,
    ) -> PlayerRecord {
        PlayerRecord {
            id,
            name: name.to_string(),
            positions: positions.to_vec(),
            rating,
            age,
        }
    }

    /// Creates a 23-man squad covering every position
    pub fn create_squad() -> Vec<PlayerRecord> {
        use Position::*;
        let squad: [(&str, &[Position], u8, u8); 23] = [
            ("Ederson", &[Gk], 88, 30),
            ("Ortega", &[Gk], 78, 31),
            ("Ruben Dias", &[Cb], 89, 26),
            ("Stones", &[Cb, Cdm], 85, 29),
            ("Gvardiol", &[Cb, Lb], 84, 21),
            ("Ake", &[Cb, Lb], 83, 28),
            ("Akanji", &[Cb, Rb], 84, 28),
            ("Walker", &[Rb, Rwb], 84, 33),
            ("Lewis", &[Rb, Lb], 76, 19),
            ("Cancelo", &[Lwb, Rwb, Lb], 86, 29),
            ("Rodri", &[Cdm, Cm], 91, 27),
            ("Kovacic", &[Cm, Cdm], 83, 29),
            ("Phillips", &[Cdm], 79, 27),
            ("De Bruyne", &[Cm, Cam], 91, 32),
            ("Bernardo Silva", &[Cam, Rw, Cm], 88, 29),
            ("Foden", &[Cam, Lw, Rm], 87, 23),
            ("Grealish", &[Lw, Lm], 85, 28),
            ("Doku", &[Lw, Rw, Lm], 81, 21),
            ("Bobb", &[Rm, Rw], 70, 20),
            ("Haaland", &[St], 91, 23),
            ("Alvarez", &[Cf, St], 82, 23),
            ("McAtee", &[Cam, Cm], 73, 21),
            ("Palmer", &[Rw, Cam, Rm], 80, 21),
        ];

        squad
            .iter()
            .enumerate()
            .map(|(i, (name, positions, rating, age))| {
                Self::create_player(1000 + i as u64, name, positions, *rating, *age)
            })
            .collect()
    }

    /// Renders players as a roster table the extractor understands.
    ///
    /// Positions are rendered as `<span>` labels next to the player link.
    pub fn roster_html(players: &[PlayerRecord]) -> String {
        let rows: String = players
            .iter()
            .map(|player| {
                let labels: String = player
                    .positions
                    .iter()
                    .map(|p| format!(r#"<span class="pos">{}</span>"#, p.code()))
                    .collect();
                format!(
                    r#"<tr><td class="col-avatar"><img src="/avatar/{id}.png"></td><td class="col-name"><a href="/player/{id}/{slug}/">{name}</a>{labels}</td><td class="col-age">{age}</td><td class="col-oa">{rating}</td><td class="col-vl">€10M</td></tr>"#,
                    id = player.id,
                    slug = player.name.to_lowercase().replace(' ', "-"),
                    name = player.name,
                    age = player.age,
                    rating = player.rating,
                )
            })
            .collect();

        format!(
            "<html><body><table><thead><tr><th></th><th>Name</th><th>Age</th><th>OVR</th><th>Value</th></tr></thead><tbody>{rows}</tbody></table></body></html>"
        )
    }
}
