/// Built-in word list used when no word file is configured
pub const BUNDLED_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon",
    "basket", "bench", "best", "birthday", "book", "briefcase", "camera", "camping",
    "candle", "cat", "cauliflower", "chat", "children", "class", "classic", "classroom",
    "coffee", "colorful", "cook", "cool", "copy", "cream", "crisis", "crossword",
    "cycle", "dam", "dessert", "desk", "desktop", "dog", "door", "drink",
    "drive", "egg", "elephant", "energy", "envelope", "exercise", "fabric", "family",
    "farm", "feather", "festival", "field", "fish", "flower", "forest", "fruit",
    "garden", "ginger", "glass", "globe", "grape", "guitar", "hammer", "harbor",
    "hiking", "honey", "horse", "island", "jacket", "jungle", "kitchen", "kite",
    "ladder", "lamp", "lemon", "letter", "library", "lizard", "magnet", "market",
    "meadow", "mirror", "monkey", "morning", "mountain", "napkin", "needle", "night",
    "ocean", "orange", "oven", "paint", "palace", "pencil", "pepper", "piano",
    "planet", "pocket", "puzzle", "quiet", "rabbit", "rain", "river", "rocket",
    "salad", "sandal", "season", "shadow", "silver", "socket", "spider", "spring",
    "station", "summer", "sunset", "table", "teacher", "thunder", "ticket", "tiger",
    "tomato", "travel", "tunnel", "turtle", "umbrella", "valley", "violin", "wagon",
    "water", "window", "winter", "wizard", "yellow", "zebra",
];
