use super::labels::LabelMap;

/// Bumped whenever [`VOCABULARY`] changes; models trained against one version
/// are only valid for the same version.
pub const VOCABULARY_VERSION: u32 = 1;

/// Sign vocabulary in its fixed declaration order. Position is the class index.
pub const VOCABULARY: [&str; 200] = [
    "bed",
    "before",
    "bowling",
    "computer",
    "cool",
    "corn",
    "dark",
    "drink",
    "accident",
    "change",
    "delicious",
    "dog",
    "apple",
    "argue",
    "australia",
    "balance",
    "banana",
    "basketball",
    "black",
    "brother",
    "candy",
    "cold",
    "country",
    "deaf",
    "decide",
    "delay",
    "different",
    "discuss",
    "down",
    "add",
    "africa",
    "all",
    "alone",
    "bad",
    "barely",
    "beard",
    "bird",
    "blue",
    "brown",
    "call",
    "can",
    "carrot",
    "catch",
    "champion",
    "check",
    "choose",
    "city",
    "class",
    "cloud",
    "convince",
    "correct",
    "cousin",
    "crash",
    "cry",
    "dance",
    "daughter",
    "day",
    "dive",
    "dry",
    "easter",
    "accept",
    "adult",
    "again",
    "ago",
    "allergy",
    "analyze",
    "animal",
    "appointment",
    "approve",
    "arm",
    "ask",
    "avoid",
    "baby",
    "ball",
    "balloon",
    "bar",
    "bear",
    "believe",
    "blanket",
    "book",
    "boss",
    "bother",
    "bottom",
    "boy",
    "bread",
    "bring",
    "business",
    "buy",
    "card",
    "care",
    "careful",
    "carry",
    "cat",
    "cent",
    "chat",
    "cheat",
    "child",
    "children",
    "color",
    "contribute",
    "cook",
    "cookie",
    "cop",
    "copy",
    "cow",
    "crazy",
    "deer",
    "dentist",
    "destroy",
    "dirty",
    "disappear",
    "discover",
    "doctor",
    "dollar",
    "drawer",
    "drop",
    "ear",
    "earn",
    "afternoon",
    "airplane",
    "allow",
    "almost",
    "already",
    "also",
    "angry",
    "anniversary",
    "answer",
    "apartment",
    "appear",
    "area",
    "arrive",
    "attention",
    "attitude",
    "attract",
    "aunt",
    "autumn",
    "awful",
    "awkward",
    "backpack",
    "bake",
    "bathroom",
    "beautiful",
    "because",
    "bell",
    "benefit",
    "bet",
    "better",
    "big",
    "bitter",
    "blame",
    "bless",
    "blind",
    "boat",
    "bored",
    "borrow",
    "bottle",
    "box",
    "bracelet",
    "breathe",
    "busy",
    "cafeteria",
    "cake",
    "california",
    "calm",
    "cancel",
    "candle",
    "caption",
    "car",
    "category",
    "center",
    "chain",
    "chair",
    "character",
    "chase",
    "cheap",
    "cheese",
    "chemistry",
    "chicken",
    "choice",
    "chop",
    "christmas",
    "clean",
    "close",
    "coach",
    "cochlear implant",
    "coffee",
    "college",
    "compare",
    "complain",
    "complex",
    "contact",
    "count",
    "cracker",
    "curriculum",
    "curse",
    "cut",
    "cute",
    "dad",
    "decorate",
    "deep",
];

/// Label mapping for the fixed sign vocabulary. No filesystem access.
pub fn get_labels() -> LabelMap {
    LabelMap::from_ordered(VOCABULARY)
}
