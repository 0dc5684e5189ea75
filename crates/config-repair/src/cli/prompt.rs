//! 交互确认
//!
//! 将「是否继续」的终端交互抽象为 trait，修复流程只依赖注入的
//! 确认器，测试中可用 mock 替代真实终端。

use std::io::Write as _;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::Result;

/// 确认器接口
///
/// 返回 `true` 表示操作者同意继续执行写入。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// 向操作者提问并等待回答
    async fn confirm(&self, question: &str) -> Result<bool>;
}

/// 从标准输入读取回答的确认器
///
/// 接受英文 yes/y 与中文 是的/是（大小写不敏感），
/// 其余任何输入均视为拒绝。
pub struct StdinPrompt;

impl StdinPrompt {
    /// 判断一行输入是否为确认
    fn is_affirmative(input: &str) -> bool {
        matches!(
            input.trim().to_lowercase().as_str(),
            "yes" | "y" | "是的" | "是"
        )
    }
}

#[async_trait]
impl ConfirmationPrompt for StdinPrompt {
    async fn confirm(&self, question: &str) -> Result<bool> {
        print!("{} (yes/no): ", question);
        std::io::stdout().flush()?;

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        let read = reader.read_line(&mut line).await?;

        // EOF 视为拒绝
        if read == 0 {
            println!();
            return Ok(false);
        }

        Ok(Self::is_affirmative(&line))
    }
}

/// 跳过交互的确认器
///
/// 由 `--yes` 选择，用于无人值守的运维场景。
pub struct AssumeYes;

#[async_trait]
impl ConfirmationPrompt for AssumeYes {
    async fn confirm(&self, question: &str) -> Result<bool> {
        println!("{} (yes/no): yes [--yes 自动确认]", question);
        Ok(true)
    }
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_tokens() {
        assert!(StdinPrompt::is_affirmative("yes"));
        assert!(StdinPrompt::is_affirmative("y"));
        assert!(StdinPrompt::is_affirmative("是的"));
        assert!(StdinPrompt::is_affirmative("是"));
    }

    #[test]
    fn test_affirmative_case_and_whitespace() {
        assert!(StdinPrompt::is_affirmative("YES"));
        assert!(StdinPrompt::is_affirmative("Yes"));
        assert!(StdinPrompt::is_affirmative("  Y  \n"));
        assert!(StdinPrompt::is_affirmative("是的\n"));
    }

    #[test]
    fn test_decline_inputs() {
        assert!(!StdinPrompt::is_affirmative("no"));
        assert!(!StdinPrompt::is_affirmative("n"));
        assert!(!StdinPrompt::is_affirmative(""));
        assert!(!StdinPrompt::is_affirmative("   \n"));
        assert!(!StdinPrompt::is_affirmative("yess"));
        assert!(!StdinPrompt::is_affirmative("否"));
    }

    #[tokio::test]
    async fn test_assume_yes_always_confirms() {
        let prompt = AssumeYes;
        let confirmed = prompt.confirm("是否继续?").await.unwrap();
        assert!(confirmed);
    }
}
