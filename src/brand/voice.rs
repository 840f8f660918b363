//! Sample copy written in the brand's voice.

use crate::engine::RandomSource;

use super::vibe::Vibe;

/// Tone guidance plus sample lines with the brand name filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandVoice {
    /// One-line description of the tone.
    pub tone: &'static str,
    /// Hero headline.
    pub headline: String,
    /// Button or banner copy.
    pub call_to_action: String,
    /// Short social media post.
    pub social_post: String,
}

struct VoiceTemplates {
    tone: &'static str,
    headlines: [&'static str; 2],
    calls_to_action: [&'static str; 2],
    social_posts: [&'static str; 2],
}

const fn templates(vibe: Vibe) -> VoiceTemplates {
    match vibe {
        Vibe::MinimalClean => VoiceTemplates {
            tone: "Calm, concise and confident. Fewer words, chosen carefully.",
            headlines: ["{name}. Nothing extra.", "Clarity, by {name}."],
            calls_to_action: ["Get started", "See how it works"],
            social_posts: [
                "We took everything away until only what matters was left. Meet {name}.",
                "Simple is hard. {name} makes it look easy.",
            ],
        },
        Vibe::BoldEnergetic => VoiceTemplates {
            tone: "Loud, punchy and high energy. Short sentences that hit hard.",
            headlines: ["Go big with {name}.", "{name} doesn't do quiet."],
            calls_to_action: ["Let's go", "Jump in now"],
            social_posts: [
                "Ready to turn it up? {name} just dropped something huge.",
                "No half measures. {name} is here to move fast.",
            ],
        },
        Vibe::LuxuriousPremium => VoiceTemplates {
            tone: "Elegant, unhurried and exclusive. Every word feels considered.",
            headlines: ["{name}: crafted for the few.", "The art of {name}."],
            calls_to_action: ["Request an invitation", "Discover the collection"],
            social_posts: [
                "Some things are worth the wait. {name} is one of them.",
                "Quietly exceptional. Introducing {name}.",
            ],
        },
        Vibe::PlayfulFun => VoiceTemplates {
            tone: "Warm, witty and a little cheeky. Talks like a friend.",
            headlines: ["Say hello to {name}!", "{name} makes everything more fun."],
            calls_to_action: ["Try it, you'll smile", "Come play"],
            social_posts: [
                "Guess who just showed up to the party? It's {name}!",
                "Serious problems, silly-good solutions. That's {name}.",
            ],
        },
        Vibe::EarthyOrganic => VoiceTemplates {
            tone: "Honest, grounded and caring. Plain language, real stories.",
            headlines: ["Rooted in care: {name}.", "{name}, naturally."],
            calls_to_action: ["Learn our story", "Grow with us"],
            social_posts: [
                "Good things take time. {name} is made the slow, honest way.",
                "From the ground up, {name} is built to last.",
            ],
        },
        Vibe::TechyModern => VoiceTemplates {
            tone: "Sharp, precise and forward-looking. Confident without jargon.",
            headlines: ["{name}: built for what's next.", "Ship faster with {name}."],
            calls_to_action: ["Start free", "Read the docs"],
            social_posts: [
                "We rebuilt the stack from first principles. Say hi to {name}.",
                "Less friction, more momentum. {name} is live.",
            ],
        },
        Vibe::ClassicTimeless => VoiceTemplates {
            tone: "Measured, trustworthy and assured. Speaks with quiet authority.",
            headlines: ["{name}. Trusted for generations.", "Enduring quality from {name}."],
            calls_to_action: ["Speak with us", "Explore our heritage"],
            social_posts: [
                "Trends come and go. {name} stays.",
                "Built on principles that don't change. That's {name}.",
            ],
        },
        Vibe::EdgyDisruptive => VoiceTemplates {
            tone: "Raw, provocative and unapologetic. Breaks the rules on purpose.",
            headlines: ["{name} breaks the mold.", "Forget the rules. This is {name}."],
            calls_to_action: ["Join the rebellion", "Break something"],
            social_posts: [
                "Everyone zigged. {name} tore up the map.",
                "Not for everyone. Exactly the point. {name}.",
            ],
        },
    }
}

fn fill(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

/// Pick one headline, call to action and social post for `vibe`.
pub fn write_voice(name: &str, vibe: Vibe, rng: &mut impl RandomSource) -> BrandVoice {
    let templates = templates(vibe);
    let name = name.trim();
    let headline = rng.pick(&templates.headlines).copied().unwrap_or_default();
    let call_to_action = rng.pick(&templates.calls_to_action).copied().unwrap_or_default();
    let social_post = rng.pick(&templates.social_posts).copied().unwrap_or_default();
    BrandVoice {
        tone: templates.tone,
        headline: fill(headline, name),
        call_to_action: call_to_action.to_string(),
        social_post: fill(social_post, name),
    }
}
