use swc_css_ast::Stylesheet;
use swc_css_codegen::{
    writer::basic::{BasicCssWriter, BasicCssWriterConfig},
    CodeGenerator, CodegenConfig, Emit,
};

/// 使用 swc_css_codegen 生成 CSS 字符串
///
/// 保证：
/// - 非压缩输出，2 空格缩进，LF 换行
/// - 相同输入产生相同输出
pub fn emit_css(stylesheet: &Stylesheet) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    let writer_config = BasicCssWriterConfig {
        indent_type: swc_css_codegen::writer::basic::IndentType::Space,
        indent_width: 2,
        linefeed: swc_css_codegen::writer::basic::LineFeed::LF,
    };

    let mut wr = BasicCssWriter::new(&mut output, None, writer_config);
    let mut gen = CodeGenerator::new(&mut wr, CodegenConfig { minify: false });

    gen.emit(stylesheet)?;

    Ok(output)
}

/// 从共享变量直接生成样式表文本
pub fn render_stylesheet(shared: &swatch_core::SharedVariables) -> Result<String, std::fmt::Error> {
    emit_css(&crate::ir::create_stylesheet(shared))
}
