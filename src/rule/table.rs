//! 内置规则表
//! 表内顺序即优先级，首个命中的规则胜出

use super::model::RuleDef;

/// 前端/CMS 规则
pub const FRONTEND_RULES: &[RuleDef] = &[
    RuleDef::with_keywords("WordPress", r"wp-content|wordpress", &["wp-content", "wp-includes"]),
    RuleDef::with_keywords("Django", r"csrfmiddlewaretoken|django", &["csrfmiddlewaretoken"]),
    RuleDef::with_keywords("Flask", r"flask-session|flask", &["flask-session"]),
    RuleDef::new("Ruby on Rails", r"ruby|rails"),
    RuleDef::new("Laravel", r"laravel|php artisan"),
    RuleDef::new("Next.js", r"nextjs|_next"),
    RuleDef::with_keywords("React", r"react|react-dom", &["react-dom", "jsx"]),
    RuleDef::new("Vue.js", r"vuejs|vue-router"),
    RuleDef::new("CS-Cart", r"cscart|var/(cache|compiled)"),
    RuleDef::new("Bitrix", r"bitrix|bxcore"),
];

/// Web服务器规则（仅作用于Server头）
pub const WEB_SERVER_RULES: &[RuleDef] = &[
    RuleDef::new("nginx", r"nginx"),
    RuleDef::new("Apache", r"apache"),
    RuleDef::new("LiteSpeed", r"LiteSpeed"),
];

/// 后端语言规则
pub const BACKEND_RULES: &[RuleDef] = &[
    RuleDef::new("PHP", r"php"),
    RuleDef::new("Python", r"python"),
    RuleDef::new("Ruby", r"ruby"),
    RuleDef::new("Node.js", r"node.js|javascript"),
];

/// 严格标记特征（signature 策略）
pub const SIGNATURE_FRONTEND_RULES: &[RuleDef] = &[
    RuleDef::new("WordPress", r"/wp-content/"),
    RuleDef::new("Django", r#"name=['"]csrfmiddlewaretoken['"]"#),
    RuleDef::new("Flask", r"flask"),
    RuleDef::new("React", r"/static/js/main\.\w+\.js"),
    RuleDef::new("Vue.js", r"vue.runtime.min.js"),
    RuleDef::new("Laravel", r"/js/app.js"),
    RuleDef::new("Ruby on Rails", r"data-turbolinks-track"),
    RuleDef::new("Next.js", r"__NEXT_DATA__"),
];

pub const SIGNATURE_BACKEND_RULES: &[RuleDef] = &[
    RuleDef::new("PHP", r"\.php"),
    RuleDef::new("Python", r"(wsgi|django|flask)"),
    RuleDef::new("Ruby", r"(rails|\.rb)"),
    RuleDef::new("Node.js", r"express|node.js"),
];
