pub const ISSUE: &str = r#"
{{position}}. Issue #{{number}}
   Title: {{title}}
   State: {{state}}
   Labels: {{labels}}
   Created: {{created_at}}
   Updated: {{updated_at}}
   Description: {{description}}
------------------------------------------------------------"#;

pub const OPEN_ISSUE: &str = r#"
{{position}}. Issue #{{number}}
   Title: {{title}}
   Created: {{created_at}}
   Updated: {{updated_at}}
   Description: {{description}}
   Priority: {{priority}}
------------------------------------------------------------"#;

pub const RANKED: &str = "{{rank}}. #{{number}} - {{priority}} - {{title}}\
{{#if score}}\n     (Original Score: {{score}}/10){{/if}}";
