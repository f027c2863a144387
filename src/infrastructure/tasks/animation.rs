use crate::infrastructure::types::Engine;

#[embassy_executor::task]
pub async fn animation_task(mut engine: Engine) {
    engine.run().await;
}
