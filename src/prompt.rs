//! Prompt construction for the chat-completions call.

use crate::lang::{LanguageRegistry, AUTO};

/// Build the single user-role prompt sent to the model.
///
/// A non-blank custom template wins; otherwise one of two fixed Chinese
/// instructions is synthesized depending on whether the source language was
/// given explicitly. Both instructions tell the model to output only the
/// translation, which keeps reasoning-capable GLM models from emitting
/// step-by-step thinking before the answer.
///
/// Language codes are turned into display names via the registry; unknown
/// codes pass through as-is. The input text is never truncated or escaped
/// here, request encoding is the client's job.
pub fn build_translate_prompt(text: &str, from: &str, to: &str, template: Option<&str>) -> String {
    let registry = LanguageRegistry::get();
    let from_name = registry.name_of(from);
    let to_name = registry.name_of(to);

    if let Some(template) = template.filter(|t| !t.trim().is_empty()) {
        // Chained global substitution: every occurrence of each placeholder
        // is replaced, text first, then the two language names.
        return template
            .replace("{text}", text)
            .replace("{from}", from_name)
            .replace("{to}", to_name);
    }

    if from == AUTO {
        format!(
            "请将以下文本翻译成{}，直接输出翻译结果，不要解释：\n\n{}",
            to_name, text
        )
    } else {
        format!(
            "请将以下{}文本翻译成{}，直接输出翻译结果，不要解释：\n\n{}",
            from_name, to_name, text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default Instruction Tests ====================

    #[test]
    fn test_default_prompt_explicit_source() {
        let prompt = build_translate_prompt("hi", "en", "zh-Hans", None);
        assert_eq!(prompt, "请将以下英语文本翻译成简体中文，直接输出翻译结果，不要解释：\n\nhi");
    }

    #[test]
    fn test_default_prompt_auto_source_omits_source_name() {
        let prompt = build_translate_prompt("hi", "auto", "zh-Hans", None);
        assert_eq!(prompt, "请将以下文本翻译成简体中文，直接输出翻译结果，不要解释：\n\nhi");
        assert!(!prompt.contains("自动检测"));
    }

    #[test]
    fn test_default_prompt_preserves_text_verbatim() {
        let text = "line one\nline two  {braces} <tags> & \"quotes\"";
        let prompt = build_translate_prompt(text, "en", "ja", None);
        assert!(prompt.ends_with(text));
    }

    #[test]
    fn test_default_prompt_unknown_code_echoes_in_instruction() {
        let prompt = build_translate_prompt("hi", "tlh", "en", None);
        assert!(prompt.contains("tlh"));
        assert!(prompt.contains("英语"));
    }

    // ==================== Template Substitution Tests ====================

    #[test]
    fn test_template_substitutes_all_three_placeholders() {
        let prompt = build_translate_prompt("hi", "en", "zh-Hans", Some("{from}->{to}: {text}"));
        assert_eq!(prompt, "英语->简体中文: hi");
    }

    #[test]
    fn test_template_substitutes_repeated_placeholders() {
        let prompt = build_translate_prompt("abc", "en", "ja", Some("{text} / {text} ({to}, {to})"));
        assert_eq!(prompt, "abc / abc (日语, 日语)");
    }

    #[test]
    fn test_template_without_placeholders_passes_through() {
        let prompt = build_translate_prompt("hi", "en", "ja", Some("fixed instruction"));
        assert_eq!(prompt, "fixed instruction");
    }

    #[test]
    fn test_blank_template_falls_back_to_default() {
        let prompt = build_translate_prompt("hi", "en", "zh-Hans", Some("   "));
        assert_eq!(prompt, "请将以下英语文本翻译成简体中文，直接输出翻译结果，不要解释：\n\nhi");
    }

    #[test]
    fn test_empty_template_falls_back_to_default() {
        let with_empty = build_translate_prompt("hi", "en", "zh-Hans", Some(""));
        let with_none = build_translate_prompt("hi", "en", "zh-Hans", None);
        assert_eq!(with_empty, with_none);
    }

    #[test]
    fn test_template_substitution_order_text_first() {
        // Text is substituted before the names, so a placeholder inside the
        // user text gets rewritten by the later replacements.
        let prompt = build_translate_prompt("literal {to} here", "en", "ja", Some("{text}"));
        assert_eq!(prompt, "literal 日语 here");
    }
}
