//! Test doubles for the parser a tag re-enters.

#![expect(dead_code, reason = "each test binary uses a subset of the helpers")]

use std::cell::RefCell;

use tagwright::{
    Data, ModifierRegistry, Parser, PlaceholderRenderer, Rendered, TagError, TagProperties,
    TagRenderer, TagRuntime,
};

/// One call received by [`RecordingParser`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParserCall {
    Parse {
        template: String,
        data: Data,
    },
    Loop {
        template: String,
        items: Vec<Data>,
        supplement: bool,
        ambient: Data,
    },
}

/// Renders placeholders and records what it was asked to render.
///
/// Loop output is each iteration's text concatenated in order.
pub struct RecordingParser {
    renderer: PlaceholderRenderer,
    calls: RefCell<Vec<ParserCall>>,
}

impl RecordingParser {
    pub fn new() -> Self {
        Self {
            renderer: PlaceholderRenderer::new(ModifierRegistry::with_builtins()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ParserCall> {
        self.calls.borrow().clone()
    }
}

impl Parser for RecordingParser {
    fn parse(&self, template: &str, data: &Data) -> Result<Rendered, TagError> {
        self.calls.borrow_mut().push(ParserCall::Parse {
            template: template.to_string(),
            data: data.clone(),
        });
        Ok(Rendered::new(self.renderer.render(template, data)?))
    }

    fn parse_loop(
        &self,
        template: &str,
        items: &[Data],
        supplement: bool,
        ambient: &Data,
    ) -> Result<Rendered, TagError> {
        self.calls.borrow_mut().push(ParserCall::Loop {
            template: template.to_string(),
            items: items.to_vec(),
            supplement,
            ambient: ambient.clone(),
        });
        let mut output = String::new();
        for item in items {
            let mut data = if supplement { ambient.clone() } else { Data::new() };
            data.extend(item.iter().map(|(k, v)| (k.clone(), v.clone())));
            output.push_str(&self.renderer.render(template, &data)?);
        }
        Ok(Rendered::new(output))
    }
}

/// Leaves an extraction marker in every result, standing in for a parser
/// that pulled out a verbatim block.
pub struct ExtractingParser;

pub const MARKER: &str = "__noparse_0__";
pub const EXTRACTED: &str = "{{ verbatim }}";

impl Parser for ExtractingParser {
    fn parse(&self, template: &str, _data: &Data) -> Result<Rendered, TagError> {
        Ok(Rendered::new(format!("{template}:{MARKER}")).with_extraction(MARKER, EXTRACTED))
    }

    fn parse_loop(
        &self,
        template: &str,
        items: &[Data],
        _supplement: bool,
        _ambient: &Data,
    ) -> Result<Rendered, TagError> {
        let text = items
            .iter()
            .map(|_| format!("{template}:{MARKER}"))
            .collect::<String>();
        Ok(Rendered::new(text).with_extraction(MARKER, EXTRACTED))
    }
}

/// Treats `@handle rest` as a nested tag whose content is `rest`, dispatched
/// through the runtime with this parser; anything else renders as
/// placeholders.
pub struct NestingParser<'a, 'r> {
    runtime: &'a TagRuntime<'r>,
    renderer: PlaceholderRenderer,
}

impl<'a, 'r> NestingParser<'a, 'r> {
    pub fn new(runtime: &'a TagRuntime<'r>) -> Self {
        Self {
            runtime,
            renderer: PlaceholderRenderer::new(ModifierRegistry::with_builtins()),
        }
    }
}

impl Parser for NestingParser<'_, '_> {
    fn parse(&self, template: &str, data: &Data) -> Result<Rendered, TagError> {
        let Some(nested) = template.strip_prefix('@') else {
            return Ok(Rendered::new(self.renderer.render(template, data)?));
        };
        let (handle, content) = nested.split_once(' ').unwrap_or((nested, ""));
        let value = self.runtime.dispatch(
            TagProperties::builder()
                .parser(self)
                .tag(handle)
                .content(content)
                .context(data.clone())
                .build(),
        )?;
        Ok(Rendered::new(value.to_string()))
    }

    fn parse_loop(
        &self,
        template: &str,
        items: &[Data],
        supplement: bool,
        ambient: &Data,
    ) -> Result<Rendered, TagError> {
        let mut output = String::new();
        for item in items {
            let mut data = if supplement { ambient.clone() } else { Data::new() };
            data.extend(item.iter().map(|(k, v)| (k.clone(), v.clone())));
            output.push_str(&self.parse(template, &data)?.without_extractions());
        }
        Ok(Rendered::new(output))
    }
}

/// Dispatches the same tag with the same content on every parse, so a tag
/// that renders its content recurses until the runtime stops it.
pub struct RecursiveParser<'a, 'r> {
    pub runtime: &'a TagRuntime<'r>,
    pub handle: &'static str,
}

impl Parser for RecursiveParser<'_, '_> {
    fn parse(&self, template: &str, data: &Data) -> Result<Rendered, TagError> {
        let value = self.runtime.dispatch(
            TagProperties::builder()
                .parser(self)
                .tag(self.handle)
                .content(template)
                .context(data.clone())
                .build(),
        )?;
        Ok(Rendered::new(value.to_string()))
    }

    fn parse_loop(
        &self,
        _template: &str,
        _items: &[Data],
        _supplement: bool,
        _ambient: &Data,
    ) -> Result<Rendered, TagError> {
        Err(TagError::render("loops are not supported here"))
    }
}
