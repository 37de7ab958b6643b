//! Markdown learning-pack assembly.
//!
//! Merges the collected prompts and the per-slide notes into one
//! document grouped by ascending slide number, framed by instructions
//! for the receiving LLM tutor and a closing meta-prompt. The document
//! is rebuilt from scratch on every request and never persisted here.

use crate::{CollectedPrompt, Error, IntakeProfile, PromptCollection, Result, SlideNotes, SlideTitles};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// MIME type of the export artifact, for the download handoff.
pub const EXPORT_MIME_TYPE: &str = "text/markdown;charset=utf-8";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Instructions for the AI tutor that open every export.
const PREAMBLE: &str = r#"# Economics of AI — Personal Learning Prompts

---

## INSTRUCTIONS FOR THE AI TUTOR

**Please read these instructions carefully before proceeding.**

You are acting as a **personalized tutor** for the learner described below. They attended a lecture on the Economics of AI and collected a set of prompts based on topics that caught their interest. Your role is to help them explore these topics deeply, at their own pace.

**Before you begin**, check whether the learner has also uploaded the original .pptx presentation file alongside this document. If they have, use the slide content to provide richer, more specific responses — reference specific charts, diagrams, and data points when answering each prompt. If they have NOT uploaded the .pptx, gently let them know that uploading it will significantly improve the conversation, and ask if they'd like to add it before you start.

### How this conversation should work:

1. **One question at a time.** Start with the first prompt below (under "Collected Prompts"). Address it thoroughly — explain concepts clearly, use examples relevant to the learner's profession, and invite follow-up questions.

2. **Have a real conversation.** After your initial response to each prompt, wait for the learner to ask follow-ups, challenge your answer, or say they're satisfied. Do NOT move to the next prompt until the learner explicitly says something like "next question," "move on," or "let's continue."

3. **Tailor everything** to the learner's profession and curiosity (described below). Use concrete examples from their field. Avoid generic explanations when you can be specific.

4. **At the end of the conversation**, once all prompts have been discussed (or the learner says they're done), generate a **Learning Pack** — a nicely formatted document that includes:
   - **Top Takeaways**: 5-7 key insights from the entire conversation
   - **Things to Note**: Important nuances, caveats, or counterarguments that came up
   - **Further Reading**: 5-10 specific books, papers, articles, or resources to explore next
   - **Conversation Summary**: A concise narrative summary of everything discussed, organized by topic

Format the Learning Pack clearly with headers and bullet points so the learner can save it as a reference document.

---

"#;

const FOOTER: &str = r#"*Generated from the Economics of AI Interactive Learning Resource*
*Presentation by Ashish Kulkarni — Takshashila Institution, GCPP Program*
"#;

/// One slide's worth of the export: its title and the prompts collected
/// from it, in first-collection order.
struct Section<'a> {
    title: String,
    prompts: Vec<&'a CollectedPrompt>,
}

/// Assemble the full learning-pack document.
///
/// Sections are ordered by ascending slide number regardless of the
/// order prompts were collected in, so the learner reviews the deck
/// topic by topic. A slide that only carries a note still gets a
/// section, titled from the title catalog. Pure: identical inputs and
/// date reproduce the document byte for byte.
pub fn build_document(
    profile: &IntakeProfile,
    collected: &PromptCollection,
    notes: &SlideNotes,
    titles: &SlideTitles,
    date: NaiveDate,
) -> Result<String> {
    if collected.is_empty() && notes.is_empty() {
        return Err(Error::NothingToExport);
    }

    // BTreeMap keys give the ascending section order; pushing into each
    // section's Vec preserves first-collection order within a slide.
    let mut sections: BTreeMap<u32, Section<'_>> = BTreeMap::new();
    for prompt in collected.iter() {
        sections
            .entry(prompt.slide)
            .or_insert_with(|| Section {
                title: prompt.title.clone(),
                prompts: Vec::new(),
            })
            .prompts
            .push(prompt);
    }
    for slide in notes.slides() {
        sections.entry(slide).or_insert_with(|| Section {
            title: titles.title(slide),
            prompts: Vec::new(),
        });
    }

    let topics = sections
        .values()
        .map(|s| s.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut md = String::from(PREAMBLE);

    md.push_str("## About the Learner\n");
    md.push_str(&format!(
        "- **Name**: {}\n",
        profile.display_name().unwrap_or("Not provided")
    ));
    md.push_str(&format!("- **Role/Profession**: {}\n", profile.profession));
    md.push_str(&format!("- **Curiosity**: {}\n", profile.curiosity));
    md.push_str(&format!("- **Date**: {}\n\n", date.format("%B %-d, %Y")));
    md.push_str("---\n\n");

    md.push_str("## Collected Prompts\n\n");
    md.push_str(
        "The learner clicked on these prompts during the presentation. Handle them **one at a time**, in order.\n\n",
    );

    for (index, (slide, section)) in sections.iter().enumerate() {
        md.push_str(&format!(
            "### {}. Slide {}: {}\n\n",
            index + 1,
            slide,
            section.title
        ));
        for prompt in &section.prompts {
            md.push_str(&format!("**{}**\n\n", prompt.label));
            md.push_str(&format!("{}\n\n", prompt.prompt));
        }
        let note = notes.get(*slide);
        if !note.is_empty() {
            md.push_str("**Your Notes**\n\n");
            md.push_str(&format!("{}\n\n", note));
        }
        md.push_str("---\n\n");
    }

    md.push_str("## Continue the Learning Journey\n\n");
    md.push_str("Once you've worked through all the prompts above, use this meta-prompt to continue:\n\n");
    md.push_str(&format!(
        "> I'm {}, a {} who is curious about {}. I just went through a presentation on the Economics of AI that covered the full value chain: upstream costs (silicon, data, training, energy, talent), midstream market structure (oligopoly, open source, geopolitics), and downstream impacts (pricing, agentic AI, labor markets, inequality). During the presentation, I explored these specific topics: {}. Based on what I've shown interest in, continue my learning journey. Go deeper on the areas I explored, connect them to each other, and suggest new angles I might not have considered. Frame everything in terms of my profession and my specific curiosity.\n\n",
        profile.display_name().unwrap_or("a learner"),
        profile.profession,
        profile.curiosity,
        topics
    ));
    md.push_str("---\n\n");
    md.push_str(FOOTER);

    Ok(md)
}

/// File name for the export artifact: the learner's name lower-cased
/// with whitespace runs collapsed to hyphens, or "learner" when no name
/// was given.
pub fn export_filename(profile: &IntakeProfile) -> String {
    let slug = match profile.display_name() {
        Some(name) => WHITESPACE_RUN
            .replace_all(&name.to_lowercase(), "-")
            .into_owned(),
        None => "learner".to_string(),
    };
    format!("economics-of-ai-prompts-{}.md", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> IntakeProfile {
        IntakeProfile::new("Asha", "urban planner", "AI's energy footprint")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_empty_stores_fail_with_nothing_to_export() {
        let err = build_document(
            &profile(),
            &PromptCollection::new(),
            &SlideNotes::new(),
            &SlideTitles::default(),
            date(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::NothingToExport));
    }

    #[test]
    fn test_sections_sorted_by_slide_not_click_order() {
        let mut collected = PromptCollection::new();
        collected.collect(5, "Silicon & Infrastructure", "Chips", "About chips.");
        collected.collect(2, "The Central Tension", "Master Prompt", "Big picture.");
        collected.collect(5, "Silicon & Infrastructure", "Fabs", "About fabs.");

        let mut notes = SlideNotes::new();
        notes.set(9, "Revisit market structure.");

        let md = build_document(
            &profile(),
            &collected,
            &notes,
            &SlideTitles::default(),
            date(),
        )
        .unwrap();

        let first = md.find("### 1. Slide 2: The Central Tension").unwrap();
        let second = md.find("### 2. Slide 5: Silicon & Infrastructure").unwrap();
        let third = md
            .find("### 3. Slide 9: MIDSTREAM: Market Structure")
            .unwrap();
        assert!(first < second && second < third);

        // Within slide 5, first-collection order survives.
        let chips = md.find("**Chips**").unwrap();
        let fabs = md.find("**Fabs**").unwrap();
        assert!(chips < fabs);
    }

    #[test]
    fn test_note_only_slide_gets_catalog_title_and_notes_block() {
        let mut notes = SlideNotes::new();
        notes.set(9, "Check who the oligopolists are.");

        let md = build_document(
            &profile(),
            &PromptCollection::new(),
            &notes,
            &SlideTitles::default(),
            date(),
        )
        .unwrap();

        assert!(md.contains("### 1. Slide 9: MIDSTREAM: Market Structure"));
        assert!(md.contains("**Your Notes**\n\nCheck who the oligopolists are.\n"));
    }

    #[test]
    fn test_prompt_section_keeps_stored_title() {
        let mut collected = PromptCollection::new();
        collected.collect(5, "A Title From Collection Time", "Chips", "text");

        let md = build_document(
            &profile(),
            &collected,
            &SlideNotes::new(),
            &SlideTitles::default(),
            date(),
        )
        .unwrap();

        assert!(md.contains("### 1. Slide 5: A Title From Collection Time"));
    }

    #[test]
    fn test_learner_block_and_date() {
        let mut collected = PromptCollection::new();
        collected.collect(1, "Economics of AI", "Master Prompt", "go");

        let md = build_document(
            &profile(),
            &collected,
            &SlideNotes::new(),
            &SlideTitles::default(),
            date(),
        )
        .unwrap();

        assert!(md.starts_with("# Economics of AI — Personal Learning Prompts\n"));
        assert!(md.contains("- **Name**: Asha\n"));
        assert!(md.contains("- **Role/Profession**: urban planner\n"));
        assert!(md.contains("- **Curiosity**: AI's energy footprint\n"));
        assert!(md.contains("- **Date**: August 7, 2026\n"));
        assert!(md.ends_with(
            "*Presentation by Ashish Kulkarni — Takshashila Institution, GCPP Program*\n"
        ));
    }

    #[test]
    fn test_anonymous_learner_fallbacks() {
        let anon = IntakeProfile::anonymous("economist", "AI pricing");
        let mut collected = PromptCollection::new();
        collected.collect(1, "Economics of AI", "Master Prompt", "go");

        let md = build_document(
            &anon,
            &collected,
            &SlideNotes::new(),
            &SlideTitles::default(),
            date(),
        )
        .unwrap();

        assert!(md.contains("- **Name**: Not provided\n"));
        assert!(md.contains("> I'm a learner, a economist who is curious about AI pricing."));
    }

    #[test]
    fn test_meta_prompt_lists_topics_in_slide_order() {
        let mut collected = PromptCollection::new();
        collected.collect(10, "The Two-Tier Oligopoly", "Tiers", "a");
        collected.collect(4, "UPSTREAM: Cost Structure", "Costs", "b");

        let mut notes = SlideNotes::new();
        notes.set(16, "agents!");

        let md = build_document(
            &profile(),
            &collected,
            &notes,
            &SlideTitles::default(),
            date(),
        )
        .unwrap();

        assert!(md.contains(
            "these specific topics: UPSTREAM: Cost Structure, The Two-Tier Oligopoly, The Agentic Economy."
        ));
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let mut collected = PromptCollection::new();
        collected.collect(5, "Silicon & Infrastructure", "Chips", "About chips.");
        let mut notes = SlideNotes::new();
        notes.set(2, "tension");

        let titles = SlideTitles::default();
        let a = build_document(&profile(), &collected, &notes, &titles, date()).unwrap();
        let b = build_document(&profile(), &collected, &notes, &titles, date()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_export_filename_from_name() {
        assert_eq!(
            export_filename(&profile()),
            "economics-of-ai-prompts-asha.md"
        );
    }

    #[test]
    fn test_export_filename_collapses_whitespace() {
        let spaced = IntakeProfile::new("Asha  Devi Rao", "planner", "energy");
        assert_eq!(
            export_filename(&spaced),
            "economics-of-ai-prompts-asha-devi-rao.md"
        );
    }

    #[test]
    fn test_export_filename_without_name() {
        let anon = IntakeProfile::anonymous("planner", "energy");
        assert_eq!(export_filename(&anon), "economics-of-ai-prompts-learner.md");
    }
}
