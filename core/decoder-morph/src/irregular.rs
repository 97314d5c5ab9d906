//! Inflected forms the suffix rules get wrong.

pub(crate) fn verb(form: &str) -> Option<&'static str> {
    let lemma = match form {
        "am" | "is" | "are" | "was" | "were" | "been" | "being" | "'m" | "'re" => "be",
        "'s" => "be",
        "has" | "had" | "having" | "'ve" => "have",
        "does" | "did" | "done" | "doing" => "do",
        "goes" | "went" | "gone" => "go",
        "'ll" => "will",
        "'d" => "would",
        "ca" => "can",
        "wo" => "will",
        "sees" | "saw" | "seen" | "seeing" => "see",
        "heard" => "hear",
        "stood" => "stand",
        "held" => "hold",
        "felt" => "feel",
        "knelt" => "kneel",
        "ran" => "run",
        "sat" => "sit",
        "spoke" | "spoken" => "speak",
        "wrote" | "written" => "write",
        "took" | "taken" => "take",
        "gave" | "given" => "give",
        "made" => "make",
        "came" => "come",
        "kept" => "keep",
        "brought" => "bring",
        "caught" => "catch",
        "taught" => "teach",
        "thought" => "think",
        "bought" => "buy",
        "left" => "leave",
        "led" => "lead",
        "met" => "meet",
        "sent" => "send",
        "spent" => "spend",
        "built" => "build",
        "bent" => "bend",
        "lay" | "lain" | "lying" | "lies" => "lie",
        "dying" | "dies" | "died" => "die",
        "tying" | "ties" | "tied" => "tie",
        "ate" | "eaten" => "eat",
        "drove" | "driven" => "drive",
        "rode" | "ridden" => "ride",
        "agreed" => "agree",
        "freed" => "free",
        "creating" | "created" | "creates" => "create",
        "providing" | "provided" | "provides" => "provide",
        "deciding" | "decided" | "decides" => "decide",
        "including" | "included" | "includes" => "include",
        "requiring" | "required" | "requires" => "require",
        "describing" | "described" | "describes" => "describe",
        "determining" | "determined" | "determines" => "determine",
        "examining" | "examined" | "examines" => "examine",
        "computing" | "computed" | "computes" => "compute",
        "executing" | "executed" | "executes" => "execute",
        _ => return None,
    };
    Some(lemma)
}

pub(crate) fn noun(form: &str) -> Option<&'static str> {
    let lemma = match form {
        "feet" => "foot",
        "teeth" => "tooth",
        "men" => "man",
        "women" => "woman",
        "children" => "child",
        "mice" => "mouse",
        "geese" => "goose",
        "lives" => "life",
        "knives" => "knife",
        "wives" => "wife",
        "shelves" => "shelf",
        "halves" => "half",
        "leaves" => "leaf",
        "data" => "data",
        "series" => "series",
        "species" => "species",
        "news" => "news",
        _ => return None,
    };
    Some(lemma)
}
