/*!
 * 配置系统默认值
 *
 * 提供所有配置项的默认值和默认配置创建函数。
 */

use crate::config::types::*;

/// 创建默认配置
pub fn create_default_config() -> AppConfig {
    AppConfig {
        version: "1.0.0".to_string(),
        owner: create_default_owner_config(),
        social: create_default_social_config(),
        terminal: create_default_terminal_config(),
        resume: create_default_resume_config(),
        counter: create_default_counter_config(),
    }
}

/// 创建默认站主资料
fn create_default_owner_config() -> OwnerConfig {
    OwnerConfig {
        name: "Lakshit Jain".to_string(),
        title: "Software Developer".to_string(),
        email: "lakshitjain.dev@gmail.com".to_string(),
        phone: "+91 9649059594".to_string(),
    }
}

/// 创建默认社交链接
fn create_default_social_config() -> SocialConfig {
    SocialConfig {
        github: "github.com/lakshittt".to_string(),
        linkedin: "linkedin.com/in/lakshittt".to_string(),
        biolink: "bio.link/lakshittt".to_string(),
    }
}

/// 创建默认终端行为配置
pub fn create_default_terminal_config() -> TerminalConfig {
    TerminalConfig {
        prompt: "lakshitJain@portfolio:~$".to_string(),
        processing_delay_ms: 500,
    }
}

/// 创建默认简历下载配置
fn create_default_resume_config() -> ResumeConfig {
    ResumeConfig {
        url: "https://docs.google.com/document/d/11CaRC7FOW375Z4zkGpe2s5m3XN2H2UrRsxL1q_2qVNg/export?format=pdf".to_string(),
        file_name: "Lakshit_Jain_Resume.pdf".to_string(),
    }
}

/// 创建默认访问计数配置
fn create_default_counter_config() -> CounterConfig {
    CounterConfig {
        enabled: true,
        url: "https://counter1.optistats.ovh/private/freecounterstat.php?c=4f851adnbs5l59scxty3d43jl8xat2kj"
            .to_string(),
    }
}
