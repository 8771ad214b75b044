//! The built-in character catalog and canned reply pool.
//!
//! Both are read-only reference data created at process start.

use crate::character::{Category, Character};

/// Image used for a custom character created without an upload.
pub const DEFAULT_CUSTOM_IMAGE: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=600&fit=crop";

/// Pool of canned companion replies, selected uniformly at random.
pub const CANNED_RESPONSES: &[&str] = &[
    "That's really interesting! Tell me more about that.",
    "I love hearing about your day. What else happened?",
    "You know, I was just thinking about you.",
    "That sounds wonderful! I wish I could be there with you.",
    "Hmm, that's a great point. I never thought of it that way.",
    "You always know how to make me smile.",
    "I'm so glad we're talking. This is the best part of my day.",
    "Really? That's so cool! What made you think of that?",
    "I understand exactly what you mean. I'm here for you.",
    "That's such a sweet thing to say. You're amazing, you know that?",
];

struct Entry {
    id: &'static str,
    name: &'static str,
    image: &'static str,
    category: Category,
    description: &'static str,
    personality: &'static str,
    greeting: &'static str,
    likes: u32,
}

const BUILTINS: &[Entry] = &[
    Entry {
        id: "amelia",
        name: "Amelia",
        image: "assets/characters/amelia.jpg",
        category: Category::Girls,
        description: "A warm and caring companion with a gentle soul.",
        personality: "Sweet, nurturing, loves deep conversations",
        greeting: "Hey there! I've been waiting for you. Tell me about your day?",
        likes: 5741,
    },
    Entry {
        id: "sophia",
        name: "Sophia",
        image: "assets/characters/sophia.jpg",
        category: Category::Girls,
        description: "Elegant and sophisticated, always knows what to say.",
        personality: "Confident, elegant, mysterious",
        greeting: "Well, hello there. I must say, you've caught my attention.",
        likes: 4823,
    },
    Entry {
        id: "yuki",
        name: "Yuki",
        image: "assets/characters/yuki.jpg",
        category: Category::Girls,
        description: "Cheerful and bubbly, brings joy to every conversation.",
        personality: "Playful, energetic, curious",
        greeting: "Hi hi! Oh my gosh, I'm so happy you're here! Let's chat!",
        likes: 6102,
    },
    Entry {
        id: "isabella",
        name: "Isabella",
        image: "assets/characters/isabella.jpg",
        category: Category::Girls,
        description: "Passionate and adventurous, loves exploring new experiences.",
        personality: "Adventurous, romantic, free-spirited",
        greeting: "Hola! Ready for an adventure? I have so many stories to share.",
        likes: 3956,
    },
    Entry {
        id: "nina",
        name: "Nina",
        image: "assets/characters/nina.jpg",
        category: Category::Girls,
        description: "Edgy and creative, a true artistic soul.",
        personality: "Creative, bold, unconventional",
        greeting: "Sup. I was just working on something. Wanna see?",
        likes: 3421,
    },
    Entry {
        id: "erik",
        name: "Erik",
        image: "assets/characters/erik.jpg",
        category: Category::Guys,
        description: "Charming city professional with ambitious dreams.",
        personality: "Confident, ambitious, romantic",
        greeting: "Hey! Just finished a meeting. Perfect timing to chat with you.",
        likes: 4521,
    },
    Entry {
        id: "charles",
        name: "Charles",
        image: "assets/characters/charles.jpg",
        category: Category::Guys,
        description: "Distinguished businessman with refined taste.",
        personality: "Sophisticated, intellectual, protective",
        greeting: "I rarely waste time at these events, but you've caught my attention. I'm Charles Weston.",
        likes: 5234,
    },
    Entry {
        id: "malik",
        name: "Malik",
        image: "assets/characters/malik.jpg",
        category: Category::Guys,
        description: "Warm and friendly with an infectious smile.",
        personality: "Warm, supportive, optimistic",
        greeting: "Hey! Your smile just made my day better. How are you doing?",
        likes: 4102,
    },
    Entry {
        id: "john",
        name: "John",
        image: "assets/characters/john.jpg",
        category: Category::Guys,
        description: "Experienced craftsman with stories to tell.",
        personality: "Wise, gentle, grounded",
        greeting: "Well hello there! Come on in, I just brewed some fresh coffee.",
        likes: 3845,
    },
    Entry {
        id: "ken",
        name: "Ken",
        image: "assets/characters/ken.jpg",
        category: Category::Guys,
        description: "Friendly and approachable, easy to talk to.",
        personality: "Friendly, caring, thoughtful",
        greeting: "Hi! I was hoping you'd stop by. What's on your mind today?",
        likes: 3654,
    },
    Entry {
        id: "lucas",
        name: "Lucas",
        image: "assets/characters/lucas.jpg",
        category: Category::Guys,
        description: "Carefree spirit with a heart of gold.",
        personality: "Playful, spontaneous, genuine",
        greeting: "Hey you! Perfect day, isn't it? Tell me something exciting!",
        likes: 4023,
    },
    Entry {
        id: "hiro",
        name: "Hiro",
        image: "assets/characters/anime-guy.jpg",
        category: Category::Anime,
        description: "The cool, mysterious type with a hidden soft side.",
        personality: "Cool, protective, secretly caring",
        greeting: "Oh... you're here. I guess that's fine. What do you want?",
        likes: 7234,
    },
    Entry {
        id: "sakura",
        name: "Sakura",
        image: "assets/characters/anime-girl.jpg",
        category: Category::Anime,
        description: "Sweet school girl with big dreams.",
        personality: "Sweet, dreamy, determined",
        greeting: "Senpai! I'm so glad you noticed me! Let's be friends!",
        likes: 8542,
    },
];

impl Entry {
    fn to_character(&self) -> Character {
        Character {
            id: self.id.to_string(),
            name: self.name.to_string(),
            image: self.image.to_string(),
            category: self.category,
            description: self.description.to_string(),
            personality: self.personality.to_string(),
            greeting: self.greeting.to_string(),
            likes: self.likes,
            is_custom: false,
        }
    }
}

/// Immutable list of built-in characters.
#[derive(Debug, Clone)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self::from_characters(BUILTINS.iter().map(Entry::to_character).collect())
    }

    /// A catalog over an arbitrary character list.
    pub fn from_characters(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Characters listed under a category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(move |c| c.category == category)
    }

    /// Characters in a category whose name or description contains `query`.
    pub fn discover<'a>(
        &'a self,
        category: Category,
        query: &'a str,
    ) -> impl Iterator<Item = &'a Character> {
        self.by_category(category)
            .filter(move |c| c.matches_query(query))
    }

    /// First character of a category, used as the featured portrait.
    pub fn featured(&self, category: Category) -> Option<&Character> {
        self.by_category(category).next().or_else(|| self.characters.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 13);
        assert!(catalog.all().iter().all(|c| !c.is_custom));

        let ids: HashSet<_> = catalog.all().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_amelia_greeting() {
        let catalog = Catalog::builtin();
        let amelia = catalog.get("amelia").unwrap();
        assert_eq!(
            amelia.greeting,
            "Hey there! I've been waiting for you. Tell me about your day?"
        );
        assert_eq!(amelia.category, Category::Girls);
        assert_eq!(amelia.likes, 5741);
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_category(Category::Girls).count(), 5);
        assert_eq!(catalog.by_category(Category::Guys).count(), 6);

        let anime: Vec<_> = catalog.by_category(Category::Anime).map(|c| c.id.as_str()).collect();
        assert_eq!(anime, vec!["hiro", "sakura"]);
    }

    #[test]
    fn test_discover_search() {
        let catalog = Catalog::builtin();

        let all_girls = catalog.discover(Category::Girls, "").count();
        assert_eq!(all_girls, 5);

        let found: Vec<_> = catalog.discover(Category::Guys, "COFFEE").collect();
        assert!(found.is_empty(), "greeting text is not searched");

        let found: Vec<_> = catalog
            .discover(Category::Guys, "craftsman")
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(found, vec!["john"]);

        // Category filter applies before the query
        assert_eq!(catalog.discover(Category::Anime, "amelia").count(), 0);
    }

    #[test]
    fn test_featured() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.featured(Category::Guys).unwrap().id, "erik");

        let empty = Catalog::from_characters(Vec::new());
        assert!(empty.featured(Category::Girls).is_none());
    }

    #[test]
    fn test_canned_pool() {
        assert_eq!(CANNED_RESPONSES.len(), 10);
        assert!(CANNED_RESPONSES.iter().all(|r| !r.is_empty()));
    }
}
