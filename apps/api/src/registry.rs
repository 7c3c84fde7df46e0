//! The content-type registry — one immutable table driving both the
//! generation endpoint (instruction templates) and the form pages (copy).
//!
//! Earlier iterations kept the prompt table and the page copy in separate,
//! drifting maps. This is the single canonical registry: every key the API
//! accepts has exactly one entry here, and unknown keys resolve to `None`.

/// Informal grouping used to lay out the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Instagram,
    LinkedIn,
    Marketing,
    Podcast,
    Twitter,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Instagram => "Instagram",
            Category::LinkedIn => "LinkedIn",
            Category::Marketing => "Marketing",
            Category::Podcast => "Podcast",
            Category::Twitter => "Twitter",
        }
    }

    pub const ALL: [Category; 5] = [
        Category::Instagram,
        Category::LinkedIn,
        Category::Marketing,
        Category::Podcast,
        Category::Twitter,
    ];
}

/// One registered content transformation: the key the client submits, the
/// instruction template prepended to the user's content, and the copy shown
/// on the form page. Loaded once, never mutated.
#[derive(Debug)]
pub struct ContentType {
    pub key: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub instruction: &'static str,
}

/// Resolves a content-type key, or `None` when unregistered.
pub fn find(key: &str) -> Option<&'static ContentType> {
    CONTENT_TYPES.iter().find(|ct| ct.key == key)
}

pub fn all() -> &'static [ContentType] {
    CONTENT_TYPES
}

static CONTENT_TYPES: &[ContentType] = &[
    // Instagram
    ContentType {
        key: "instagram-transcripts",
        category: Category::Instagram,
        title: "Transcript to Instagram post",
        description: "Turn a long transcript into a concise post that captures attention.",
        instruction: "Transform this long transcript into a concise, engaging Instagram post that captures attention:",
    },
    ContentType {
        key: "instagram-captions",
        category: Category::Instagram,
        title: "Reel script to caption",
        description: "Create an engaging caption from a Reel script or image description.",
        instruction: "Create an engaging Instagram caption from this Reel script or image description that drives engagement:",
    },
    ContentType {
        key: "instagram-notes",
        category: Category::Instagram,
        title: "Notes to shareable moment",
        description: "Convert personal notes into a shareable Instagram moment.",
        instruction: "Convert these personal notes into a shareable Instagram moment that resonates with followers:",
    },
    ContentType {
        key: "instagram-hashtags",
        category: Category::Instagram,
        title: "Content to hashtags",
        description: "Generate trendy, relevant hashtags for your written content.",
        instruction: "Generate trendy and relevant Instagram hashtags for this written content:",
    },
    ContentType {
        key: "instagram-trending",
        category: Category::Instagram,
        title: "Transcript to trending hashtags",
        description: "Turn a text transcript into trending hashtags that increase visibility.",
        instruction: "Transform this text transcript into trending Instagram hashtags that increase visibility:",
    },
    // LinkedIn
    ContentType {
        key: "linkedin-blog",
        category: Category::LinkedIn,
        title: "Blog post to LinkedIn post",
        description: "Convert a blog post into an inspirational, professional LinkedIn post.",
        instruction: "Convert this blog post into an inspirational, professional LinkedIn post that provides value:",
    },
    ContentType {
        key: "linkedin-ideas",
        category: Category::LinkedIn,
        title: "Ideas to discussion starters",
        description: "Transform raw ideas into thought-provoking LinkedIn posts.",
        instruction: "Transform these ideas into thought-provoking LinkedIn posts that spark professional discussion:",
    },
    ContentType {
        key: "linkedin-transcript",
        category: Category::LinkedIn,
        title: "Transcript to LinkedIn post",
        description: "Extract the most salient 500 words from a transcript.",
        instruction: "Extract and refine the most salient 500 words from this transcript for a LinkedIn post:",
    },
    ContentType {
        key: "linkedin-articles",
        category: Category::LinkedIn,
        title: "Article to LinkedIn post",
        description: "Convert an article into a professional post that maintains expertise.",
        instruction: "Convert this article into a professional LinkedIn post that maintains expertise:",
    },
    ContentType {
        key: "linkedin-thoughts",
        category: Category::LinkedIn,
        title: "Thoughts to cohesive post",
        description: "Turn scattered thoughts into an engaging, cohesive LinkedIn post.",
        instruction: "Transform these scattered thoughts into an engaging, cohesive LinkedIn post:",
    },
    // Marketing
    ContentType {
        key: "marketing-announcements",
        category: Category::Marketing,
        title: "Notes to product announcement",
        description: "Convert rough notes into a compelling product announcement.",
        instruction: "Convert these notes into a compelling product announcement that drives interest:",
    },
    ContentType {
        key: "marketing-cta",
        category: Category::Marketing,
        title: "Call-to-action polish",
        description: "Rewrite a call-to-action in an engaging, actionable style.",
        instruction: "Transform this call-to-action into an engaging, actionable style that converts:",
    },
    ContentType {
        key: "marketing-email",
        category: Category::Marketing,
        title: "Outline to email sequence",
        description: "Convert a rough outline into a strategic email sequence.",
        instruction: "Convert this rough outline into a strategic email sequence that nurtures leads:",
    },
    ContentType {
        key: "marketing-summary",
        category: Category::Marketing,
        title: "CTAs to summary",
        description: "Create a concise, powerful summary of multiple calls-to-action.",
        instruction: "Create a concise, powerful summary of these multiple calls-to-action:",
    },
    ContentType {
        key: "marketing-essays",
        category: Category::Marketing,
        title: "CTAs to essays",
        description: "Transform Twitter calls-to-action into persuasive, clickable essays.",
        instruction: "Transform these Twitter calls-to-action into persuasive, clickable essays:",
    },
    // Podcast
    ContentType {
        key: "podcast-insights",
        category: Category::Podcast,
        title: "Insights to takeaways",
        description: "Distill podcast insights into clear, concise takeaways.",
        instruction: "Distill these podcast insights into clear, concise takeaways that provide value:",
    },
    ContentType {
        key: "podcast-notes",
        category: Category::Podcast,
        title: "Transcript to show notes",
        description: "Convert transcripts and notes into audience-tailored show notes.",
        instruction: "Convert these transcripts and notes into audience-tailored podcast show notes:",
    },
    ContentType {
        key: "podcast-intros",
        category: Category::Podcast,
        title: "Transcript to intro snippet",
        description: "Turn a podcast transcript into an intro snippet that hooks listeners.",
        instruction: "Transform this podcast transcript into an engaging intro snippet that hooks listeners:",
    },
    ContentType {
        key: "podcast-titles",
        category: Category::Podcast,
        title: "Episode to titles",
        description: "Create attention-grabbing titles from in-depth podcast content.",
        instruction: "Create attention-grabbing titles from this in-depth podcast content:",
    },
    ContentType {
        key: "podcast-summaries",
        category: Category::Podcast,
        title: "Episode to summary",
        description: "Generate an engaging episode summary that drives interest.",
        instruction: "Generate an engaging episode summary from this podcast content that drives interest:",
    },
    // Twitter
    ContentType {
        key: "contrarian",
        category: Category::Twitter,
        title: "Article to contrarian tweet",
        description: "Transform any article into an attention-grabbing, contrarian tweet that stands out.",
        instruction: "Transform this article into a contrarian, punchy tweet that challenges conventional wisdom while maintaining credibility:",
    },
    ContentType {
        key: "thread",
        category: Category::Twitter,
        title: "Transcript to Twitter thread",
        description: "Create engaging Twitter threads that maintain authority while being conversational.",
        instruction: "Create a conversational yet authoritative Twitter thread from this transcript, maintaining expertise while being approachable:",
    },
    ContentType {
        key: "newsletter",
        category: Category::Twitter,
        title: "Newsletter to tweet series",
        description: "Transform your newsletter content into a series of connected, engaging tweets.",
        instruction: "Transform this newsletter content into a series of connected, engaging tweets that maintain the core message:",
    },
    ContentType {
        key: "general",
        category: Category::Twitter,
        title: "Any text to tweet",
        description: "Quick and simple way to convert any text into a tweet-friendly format.",
        instruction: "Convert this text into a tweet-friendly format that's engaging and shareable:",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for ct in all() {
            assert!(seen.insert(ct.key), "duplicate registry key: {}", ct.key);
        }
    }

    #[test]
    fn every_entry_is_fully_populated() {
        for ct in all() {
            assert!(!ct.key.is_empty());
            assert!(!ct.title.is_empty(), "missing title for {}", ct.key);
            assert!(!ct.description.is_empty(), "missing description for {}", ct.key);
            assert!(!ct.instruction.is_empty(), "missing instruction for {}", ct.key);
        }
    }

    #[test]
    fn known_key_resolves() {
        let ct = find("general").expect("general is registered");
        assert!(ct
            .instruction
            .starts_with("Convert this text into a tweet-friendly format"));
        assert_eq!(ct.category, Category::Twitter);
    }

    #[test]
    fn unknown_key_is_none() {
        assert!(find("does-not-exist").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn every_category_has_entries() {
        for cat in Category::ALL {
            assert!(
                all().iter().any(|ct| ct.category == cat),
                "no entries for {}",
                cat.label()
            );
        }
    }
}
