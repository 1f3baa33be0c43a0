//! Today's rates from a bulletin held in memory.
//!
//! Shows how the provider filters the bulletin to the requested currencies
//! and normalizes rates quoted per 100 or 1000 units.

use cnb_rates::core::currency::Currency;
use cnb_rates::provider::rates::ExchangeRateProvider;
use cnb_rates::provider::source::StaticSource;

const BULLETIN: &str = "17.10.2026 #201
země|měna|množství|kód|kurz
EMU|euro|1|EUR|24,330
Indonesie|rupie|1000|IDR|1,384
Japonsko|jen|100|JPY|15,512
USA|dolar|1|USD|22,650
";

fn main() {
    env_logger::init();

    let requested = ["CZK", "EUR", "JPY", "IDR", "KES"].map(Currency::new);
    let provider = ExchangeRateProvider::new(StaticSource::new(BULLETIN));

    match provider.get_exchange_rates(requested) {
        Ok(rates) => {
            println!("━━━ Official rates against CZK ━━━\n");
            for rate in &rates {
                println!("  {}", rate);
            }
            println!("\nKES is not published by the bulletin and is left out.");
        }
        Err(e) => eprintln!("Failed to load rates: {}", e),
    }
}
