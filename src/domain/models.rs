use serde::{Deserialize, Serialize};

/// A card laid on the table.
///
/// `id` is a display key unique within the table; `image` is the URL of the
/// card's front. The code (`"KH"`, `"0S"`) is kept when the API supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingCard {
    pub id: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl PlayingCard {
    pub fn new(id: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The card code, or the image file stem when no code was recorded.
    ///
    /// ```
    /// use cardtable::domain::PlayingCard;
    ///
    /// let card = PlayingCard::new("a", "https://deckofcardsapi.com/static/img/QD.png");
    /// assert_eq!(card.code(), "QD");
    /// ```
    pub fn code(&self) -> &str {
        if let Some(code) = &self.code {
            return code;
        }
        let file = self.image.rsplit('/').next().unwrap_or(&self.image);
        file.split('.').next().unwrap_or(file)
    }

    /// Short textual face such as `10♥` or `K♠`.
    ///
    /// Falls back to the raw code when it is not a standard two-character
    /// card code.
    pub fn face(&self) -> String {
        let code = self.code();
        let mut chars = code.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return code.to_string();
        };

        let rank = match rank {
            '0' => "10".to_string(),
            'A' | 'K' | 'Q' | 'J' | '2'..='9' => rank.to_string(),
            _ => return code.to_string(),
        };
        let suit = match suit {
            'S' => '♠',
            'H' => '♥',
            'D' => '♦',
            'C' => '♣',
            _ => return code.to_string(),
        };
        format!("{}{}", rank, suit)
    }

    pub fn is_red(&self) -> bool {
        matches!(self.code().chars().nth(1), Some('H') | Some('D'))
    }
}

/// Body of a `/api/deck/<id>/draw/` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawResponse {
    pub success: bool,
    #[serde(default)]
    pub deck_id: String,
    #[serde(default)]
    pub cards: Vec<DrawnCard>,
    #[serde(default)]
    pub remaining: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrawnCard {
    pub code: String,
    pub image: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub suit: String,
}

/// Face-up / face-down toggle for a single card. Starts face up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipState {
    flipped: bool,
}

impl FlipState {
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_serializes_without_code() {
        let card = PlayingCard::new("a", "url1");
        assert_eq!(
            serde_json::to_string(&card).unwrap(),
            r#"{"id":"a","image":"url1"}"#
        );
    }

    #[test]
    fn test_card_deserializes_without_code() {
        let card: PlayingCard = serde_json::from_str(r#"{"id":"a","image":"url1"}"#).unwrap();
        assert_eq!(card, PlayingCard::new("a", "url1"));
    }

    #[test]
    fn test_face_from_code() {
        let ten = PlayingCard::new("1", "x").with_code("0H");
        assert_eq!(ten.face(), "10♥");
        assert!(ten.is_red());

        let king = PlayingCard::new("2", "x").with_code("KS");
        assert_eq!(king.face(), "K♠");
        assert!(!king.is_red());
    }

    #[test]
    fn test_face_from_image_url() {
        let card = PlayingCard::new("1", "https://deckofcardsapi.com/static/img/AD.png");
        assert_eq!(card.face(), "A♦");
        assert!(card.is_red());
    }

    #[test]
    fn test_face_falls_back_to_code() {
        let joker = PlayingCard::new("1", "x").with_code("X1");
        assert_eq!(joker.face(), "X1");

        let odd = PlayingCard::new("1", "https://example.test/back.png");
        assert_eq!(odd.face(), "back");
    }

    #[test]
    fn test_flip_toggles() {
        let mut state = FlipState::default();
        assert!(!state.is_flipped());
        state.flip();
        assert!(state.is_flipped());
        state.flip();
        assert!(!state.is_flipped());
    }

    #[test]
    fn test_draw_response_parses_api_payload() {
        let body = r#"{
            "success": true,
            "deck_id": "3p40paa87x90",
            "cards": [{
                "code": "6H",
                "image": "https://deckofcardsapi.com/static/img/6H.png",
                "images": {"svg": "https://deckofcardsapi.com/static/img/6H.svg"},
                "value": "6",
                "suit": "HEARTS"
            }],
            "remaining": 51
        }"#;
        let response: DrawResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.remaining, 51);
        assert_eq!(response.cards[0].code, "6H");
        assert_eq!(response.cards[0].suit, "HEARTS");
    }
}
