use anyhow::Result;
use credit_audit::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置，第一个命令行参数可覆盖成绩单路径
    let config = Config::from_env().with_transcript(std::env::args().nth(1));

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let _analysis = App::initialize(config).await?.run().await?;

    Ok(())
}
