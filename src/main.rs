#[actix_web::main]
async fn main() -> std::io::Result<()> {
    contractor_board_lib::run().await
}
