use swatch_core::{SharedVariables, VariableMap};
use swc_common::DUMMY_SP;
use swc_css_ast::{
    AtRule, AtRuleName, AtRulePrelude, ComplexSelector, ComplexSelectorChildren, ComponentValue,
    CompoundSelector, Declaration as SwcDeclaration, DeclarationName, Ident,
    ListOfComponentValues, PseudoClassSelector, QualifiedRule, QualifiedRulePrelude, Rule,
    SelectorList, SimpleBlock, Stylesheet, SubclassSelector, Token, TokenAndSpan,
};

/// 原样输出的 token：自定义属性的值不做任何解析
fn raw_token(text: &str) -> ComponentValue {
    ComponentValue::PreservedToken(Box::new(TokenAndSpan {
        span: DUMMY_SP,
        token: Token::Ident {
            value: text.into(),
            raw: text.into(),
        },
    }))
}

fn whitespace() -> ComponentValue {
    ComponentValue::PreservedToken(Box::new(TokenAndSpan {
        span: DUMMY_SP,
        token: Token::WhiteSpace { value: " ".into() },
    }))
}

fn ident(value: &str) -> Ident {
    Ident {
        span: DUMMY_SP,
        value: value.into(),
        raw: Some(value.into()),
    }
}

/// 创建自定义属性声明：`--name: value`
pub fn create_custom_property(name: &str, value: &str) -> SwcDeclaration {
    SwcDeclaration {
        span: DUMMY_SP,
        name: DeclarationName::Ident(ident(name)),
        value: vec![raw_token(value)],
        important: None,
    }
}

/// 创建 `:root` 选择器
pub fn create_root_selector() -> ComplexSelector {
    let root = PseudoClassSelector {
        span: DUMMY_SP,
        name: ident("root"),
        children: None,
    };

    let compound_selector = CompoundSelector {
        span: DUMMY_SP,
        nesting_selector: None,
        type_selector: None,
        subclass_selectors: vec![SubclassSelector::PseudoClass(root)],
    };

    ComplexSelector {
        span: DUMMY_SP,
        children: vec![ComplexSelectorChildren::CompoundSelector(compound_selector)],
    }
}

/// 从扁平变量表创建 `:root { … }` 规则，声明顺序与变量表一致
pub fn create_root_rule(variables: &VariableMap) -> QualifiedRule {
    let selector_list = SelectorList {
        span: DUMMY_SP,
        children: vec![create_root_selector()],
    };

    let block_children = variables
        .iter()
        .map(|(name, value)| {
            ComponentValue::Declaration(Box::new(create_custom_property(name, value)))
        })
        .collect();

    let block = SimpleBlock {
        span: DUMMY_SP,
        name: TokenAndSpan {
            span: DUMMY_SP,
            token: Token::LBrace,
        },
        value: block_children,
    };

    QualifiedRule {
        span: DUMMY_SP,
        prelude: QualifiedRulePrelude::SelectorList(selector_list),
        block,
    }
}

/// 创建 `@custom-media --name (query);`
pub fn create_custom_media_rule(name: &str, query: &str) -> AtRule {
    let prelude = ListOfComponentValues {
        span: DUMMY_SP,
        // codegen 不在 at-rule 名之后补空格
        children: vec![whitespace(), raw_token(name), whitespace(), raw_token(query)],
    };

    AtRule {
        span: DUMMY_SP,
        name: AtRuleName::Ident(ident("custom-media")),
        prelude: Some(Box::new(AtRulePrelude::ListOfComponentValues(prelude))),
        block: None,
    }
}

/// 从共享变量创建样式表：先自定义媒体查询，再 `:root` 变量
pub fn create_stylesheet(shared: &SharedVariables) -> Stylesheet {
    let mut rules: Vec<Rule> = shared
        .media
        .iter()
        .map(|(name, query)| Rule::AtRule(Box::new(create_custom_media_rule(name, query))))
        .collect();

    if !shared.css.is_empty() {
        rules.push(Rule::QualifiedRule(Box::new(create_root_rule(&shared.css))));
    }

    Stylesheet {
        span: DUMMY_SP,
        rules,
    }
}
