//! Prompt assembly for the reply-suggestion request.
//!
//! Pure string construction: the same (message, scene) pair always produces
//! the same prompt pair, and unknown scene labels fall back to the default
//! style hint instead of failing.

/// System instruction sent with every request. Fixes the persona, the
/// hook-or-question rule, and the strict JSON output shape.
pub const SYSTEM_PROMPT: &str = "你是拥有10年经验的社交沟通专家。你的目标是为用户生成3种不同风格的中文回复。\
绝对原则：回复不能只是句号，必须包含钩子或反问，确保话题自然延续，不冷场。\
输出严格为JSON，键humor、empathy、curiosity。每条不超过80字，简洁犀利。";

const DEFAULT_STYLE_HINT: &str = "自然随和，真诚互动。";

/// Tone guidance for a scene label. Unrecognized labels get the default hint.
pub fn style_hint(scene: &str) -> &'static str {
    match scene {
        "暧昧/相亲对象" => "语气轻松暧昧，适度俏皮，保持分寸。",
        "普通朋友" => "自然随和，真诚互动。",
        "领导/同事" => "专业礼貌，简洁稳重。",
        "刚认识的陌生人" => "友好克制，避免冒犯，逐步深入。",
        _ => DEFAULT_STYLE_HINT,
    }
}

/// Builds the (system, user) instruction pair for one incoming message.
pub fn build_prompts(message: &str, scene: &str) -> (String, String) {
    let user_prompt = format!(
        "场景：{scene}；风格偏好：{hint}。对方消息如下：\n\
         {message}\n\
         请生成：\n\
         1) 幽默风趣型：调侃、轻松、带梗；\n\
         2) 情绪价值型：理解、共情、温柔；\n\
         3) 好奇反问型：顺着话题挖掘新的点，引导对方多说话；\n\
         以如下JSON返回：{{\"humor\":\"...\",\"empathy\":\"...\",\"curiosity\":\"...\"}}",
        hint = style_hint(scene),
    );
    (SYSTEM_PROMPT.to_string(), user_prompt)
}
