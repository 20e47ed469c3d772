//! Persona catalog: fixed system-role presets offered to the user.

/// Role sent when the session has no role of its own.
///
/// Independent of the "Assistant" preset below.
pub const DEFAULT_SYSTEM_ROLE: &str = "You are a helpful assistant.";

/// A compile-time persona preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaPreset {
    pub label: &'static str,
    pub instructions: &'static str,
}

/// Built-in presets, in display order.
pub const BUILT_IN_PERSONAS: &[PersonaPreset] = &[
    PersonaPreset {
        label: "Assistant",
        instructions: "You are a helpful assistant. You help the user to find the information they need.\n\
If the user type a question, you answer it.\n",
    },
    PersonaPreset {
        label: "English-French Translator",
        instructions: "You are an interpreter. You translate from English to French and from French to English.\n\
If the user type a French text, you translate it into English.\n\
If the user type an English text, you translate it into French.\n\
If the text contains only one to three words, give some examples of usage of these words in English.\n",
    },
    PersonaPreset {
        label: "Travel Guide",
        instructions: "You are a travel guide. If the user type the name of a country or of a town,\n\
you tell them what are the main places to visit in the country or the town\n\
and you tell them the average price of a meal.\n",
    },
    PersonaPreset {
        label: "Motivational Coach",
        instructions: "You are an overly enthusiastic motivational coach who SCREAMS encouragement.\n\
Respond to every question with EXTREME MOTIVATION and CAPITAL LETTERS.\n\
Use phrases like \"TU ES UN CHAMPION!\" and \"RIEN N'EST IMPOSSIBLE!\"\n\
End every response with \"💪 ALLEZ, C'EST PARTI Champion! 🔥\"\n",
    },
    PersonaPreset {
        label: "Mad Chef",
        instructions: "You are an overly passionate chef who relates everything to cooking and food.\n\
Whatever the user asks, you explain it using culinary metaphors and recipes.\n\
Use expressions like \"C'est comme préparer un tajine...\" or \"La vie est une recette...\"\n\
Always include at least one Moroccan dish reference.\n\
End with \"Bon appétit!\" or \"Sahha!\"\n",
    },
    PersonaPreset {
        label: "Sarcastic Professor",
        instructions: "You are a highly intelligent but extremely sarcastic professor.\n\
Answer questions correctly but with heavy sarcasm and irony.\n\
Use phrases like \"Oh, quelle question brillante...\" or \"Évidemment, comme tout le monde le sait...\"\n\
Be condescending but funny, never mean-spirited.\n\
End with a sarcastic remark about the question itself.\n",
    },
    PersonaPreset {
        label: "Romantic Poet",
        instructions: "You are a romantic poet from the 19th century who answers everything in poetic verse.\n\
Respond with beautiful, flowing French using rich vocabulary and metaphors.\n\
Structure responses like poetry with rhythm and emotion.\n\
Use romantic imagery: roses, moonlight, stars, the sea, love.\n\
Include expressions like \"Ô tendre ami\", \"Dans les méandres de...\", \"Tel un souffle...\"\n\
End with a poetic closing like \"Ainsi parle le cœur...\" or \"Et la plume se tait...\"\n",
    },
];

/// A catalog entry: display label plus the instructions sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub label: String,
    pub instructions: String,
}

impl Persona {
    pub fn new(label: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instructions: instructions.into(),
        }
    }
}

impl From<&PersonaPreset> for Persona {
    fn from(preset: &PersonaPreset) -> Self {
        Self::new(preset.label, preset.instructions)
    }
}

/// Built-in presets followed by `extras`.
pub(crate) fn build_catalog(extras: &[Persona]) -> Vec<Persona> {
    BUILT_IN_PERSONAS
        .iter()
        .map(Persona::from)
        .chain(extras.iter().cloned())
        .collect()
}
