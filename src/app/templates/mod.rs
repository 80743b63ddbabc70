//! Fixed text payloads for generated files.
//!
//! Every template is a plain string with `{name}` / `{module}` placeholders,
//! rendered by [`render`]. Rendering never fails and has no conditionals.

pub mod grpc;
pub mod project;

use crate::domain::model::GenerationRequest;

/// 單次掃描替換，代入的值本身不會再被展開
pub fn render(template: &str, request: &GenerationRequest) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{name}") {
            rendered.push_str(request.name());
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{module}") {
            rendered.push_str(request.module());
            rest = after;
        } else {
            rendered.push('{');
            rest = &tail[1..];
        }
    }
    rendered.push_str(rest);
    rendered
}
