use serde::Serialize;

use crate::cli::ComposeArgs;
use crate::compose::{compose, encode_field_content, has_placeholder};
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct ComposeView {
    url: String,
    substituted: bool,
}

pub fn run(ctx: &AppContext, args: ComposeArgs) -> AppResult<()> {
    let content = if args.encode {
        encode_field_content(&args.content)
    } else {
        args.content
    };

    let view = ComposeView {
        url: compose(&args.template, &content),
        substituted: has_placeholder(&args.template),
    };
    ctx.output.emit(&view.url, &view)
}
