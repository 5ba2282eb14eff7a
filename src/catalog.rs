//! Static lookup tables: topics, article types, and per-topic code samples.
//!
//! Everything here is plain data. Iteration order of [`TOPICS`] and
//! [`ARTICLE_TYPES`] is significant: batch generation walks both tables
//! round-robin in the order they are declared.
//!
//! Section templates and title patterns use the literal placeholder
//! [`PLACEHOLDER`], which the assembler replaces with the chosen category.

/// Placeholder substituted with the category phrase in all templates.
pub const PLACEHOLDER: &str = "{topic}";

/// A technology subject area with its tags and candidate categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicDefinition {
    pub key: &'static str,
    pub title: &'static str,
    /// Written to front-matter in this order.
    pub tags: &'static [&'static str],
    /// Sub-subject phrases; index 0 is the fallback category.
    pub categories: &'static [&'static str],
}

/// An article structural template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleTypeDefinition {
    pub key: &'static str,
    pub title_pattern: &'static str,
    pub sections: &'static [&'static str],
}

pub static TOPICS: &[TopicDefinition] = &[
    TopicDefinition {
        key: "java",
        title: "Java技术深度解析",
        tags: &["java", "jvm", "spring", "微服务"],
        categories: &[
            "JVM性能调优与内存管理",
            "Spring Boot高级特性",
            "Java并发编程实践",
            "微服务架构设计",
            "Java新特性解读",
        ],
    },
    TopicDefinition {
        key: "rust",
        title: "Rust系统编程",
        tags: &["rust", "系统编程", "内存安全", "性能优化"],
        categories: &[
            "Rust所有权模型深度解析",
            "异步编程与Tokio",
            "WebAssembly与Rust",
            "系统级编程实践",
            "Rust性能优化技巧",
        ],
    },
    TopicDefinition {
        key: "ai",
        title: "人工智能与机器学习",
        tags: &["ai", "machine-learning", "deep-learning", "llm"],
        categories: &[
            "大语言模型原理与实践",
            "深度学习框架对比",
            "AI工程化部署",
            "机器学习算法优化",
            "AIGC应用开发",
        ],
    },
    TopicDefinition {
        key: "database",
        title: "数据库技术",
        tags: &["database", "mysql", "postgresql", "redis"],
        categories: &[
            "MySQL性能优化实战",
            "PostgreSQL高级特性",
            "Redis分布式缓存",
            "数据库架构设计",
            "NewSQL技术趋势",
        ],
    },
    TopicDefinition {
        key: "devops",
        title: "DevOps与云原生",
        tags: &["devops", "kubernetes", "docker", "ci-cd"],
        categories: &[
            "Kubernetes集群管理",
            "Docker容器化实践",
            "CI/CD流水线建设",
            "云原生架构设计",
            "监控与日志系统",
        ],
    },
];

pub static ARTICLE_TYPES: &[ArticleTypeDefinition] = &[
    ArticleTypeDefinition {
        key: "tutorial",
        title_pattern: "{topic} - 实战教程",
        sections: &[
            "## 前言\n\n介绍{topic}的背景和重要性",
            "## 环境准备\n\n- 开发环境配置\n- 依赖项安装\n- 项目初始化",
            "## 核心概念\n\n详细解释{topic}的核心概念和原理",
            "## 实践案例\n\n通过具体例子演示{topic}的使用方法",
            "## 性能优化\n\n- 性能瓶颈分析\n- 优化策略\n- 最佳实践",
            "## 总结\n\n总结{topic}的关键要点和学习心得",
        ],
    },
    ArticleTypeDefinition {
        key: "comparison",
        title_pattern: "{topic} - 技术对比分析",
        sections: &[
            "## 背景介绍\n\n为什么需要对比{topic}相关技术",
            "## 技术概览\n\n各种{topic}技术的基本介绍",
            "## 详细对比\n\n从多个维度对比不同技术的优缺点",
            "## 选择建议\n\n不同场景下的技术选型建议",
            "## 实际应用\n\n真实项目中的应用案例",
            "## 总结\n\n对比分析的结论和建议",
        ],
    },
    ArticleTypeDefinition {
        key: "practice",
        title_pattern: "{topic} - 生产实践总结",
        sections: &[
            "## 项目背景\n\n介绍使用{topic}的项目背景",
            "## 架构设计\n\n系统的整体架构设计思路",
            "## 实施过程\n\n详细的项目实施过程和遇到的问题",
            "## 踩坑记录\n\n- 问题描述\n- 原因分析\n- 解决方案",
            "## 性能数据\n\n实际运行中的性能表现数据",
            "## 经验总结\n\n项目完成后的经验教训总结",
        ],
    },
];

/// Description phrase templates. One is picked at random per article.
pub static DESCRIPTION_TEMPLATES: &[&str] = &[
    "深入解析{topic}的核心概念和实践经验",
    "{topic}实战指南 - 从零到生产环境",
    "基于{topic}的项目实践总结与踩坑记录",
    "{topic}技术对比分析与选型建议",
    "{topic}性能优化实战技巧总结",
];

/// A fenced code sample: info-string language plus a body template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample {
    pub language: &'static str,
    pub template: &'static str,
}

const JAVA_SAMPLE: CodeSample = CodeSample {
    language: "java",
    template: r#"// {topic}相关代码示例
public class Example {
    public static void main(String[] args) {
        System.out.println("{topic}实践示例");
        // TODO: 添加具体实现
    }
}"#,
};

static CODE_SAMPLES: &[(&str, CodeSample)] = &[
    ("java", JAVA_SAMPLE),
    (
        "rust",
        CodeSample {
            language: "rust",
            template: r#"// {topic}相关代码示例
fn main() {
    println!("{topic}实践示例");
    // TODO: 添加具体实现
}"#,
        },
    ),
    (
        "ai",
        CodeSample {
            language: "python",
            template: r#"# {topic}相关代码示例
import numpy as np
import matplotlib.pyplot as plt

print("{topic}实践示例")
# TODO: 添加具体实现"#,
        },
    ),
    (
        "database",
        CodeSample {
            language: "sql",
            template: r#"-- {topic}相关SQL示例
SELECT * FROM example_table
WHERE condition = '{topic}';
-- TODO: 添加具体实现"#,
        },
    ),
    (
        "devops",
        CodeSample {
            language: "yaml",
            template: r#"# {topic}相关配置示例
version: '3.8'
services:
  app:
    image: example:latest
    environment:
      - TOPIC={topic}
# TODO: 添加具体实现"#,
        },
    ),
];

pub fn find_topic(key: &str) -> Option<&'static TopicDefinition> {
    TOPICS.iter().find(|t| t.key == key)
}

pub fn find_article_type(key: &str) -> Option<&'static ArticleTypeDefinition> {
    ARTICLE_TYPES.iter().find(|t| t.key == key)
}

/// Code sample for a topic. Unrecognized topics get the Java sample.
pub fn code_sample(topic: &str) -> &'static CodeSample {
    CODE_SAMPLES
        .iter()
        .find(|(key, _)| *key == topic)
        .map(|(_, sample)| sample)
        .unwrap_or(&JAVA_SAMPLE)
}
