use openalgo::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    let client = Client::from_env()?;

    let expiries = client
        .expiry(&ExpiryRequest::new(
            "NIFTY",
            EXCHANGE_NFO,
            InstrumentKind::Options,
        ))
        .await?;
    // Expiries come back as DD-MMM-YY; the options endpoints take DDMMMYY
    let Some(expiry) = expiries.first().map(|e| e.replace('-', "")) else {
        info!("No NIFTY expiries available");
        return Ok(());
    };
    info!("Nearest expiry: {}", expiry);

    let chain = client
        .option_chain(
            &OptionChainRequest::new("NIFTY", EXCHANGE_NSE_INDEX, &expiry).with_strike_count(5),
        )
        .await?;
    println!("{chain}");

    let symbol = client
        .option_symbol(&OptionSymbolRequest::new(
            "NIFTY",
            EXCHANGE_NSE_INDEX,
            &expiry,
            "ATM",
            OptionType::Ce,
        ))
        .await?;
    info!("ATM call: {}", symbol);

    if let Some(atm_call) = symbol.symbol.as_deref() {
        let greeks = client
            .option_greeks(
                &OptionGreeksRequest::new(atm_call, EXCHANGE_NFO)
                    .with_underlying("NIFTY", EXCHANGE_NSE_INDEX),
            )
            .await?;
        info!("Greeks: {}", greeks.greeks);
    }

    let synthetic = client
        .synthetic_future(&SyntheticFutureRequest::new(
            "NIFTY",
            EXCHANGE_NSE_INDEX,
            &expiry,
        ))
        .await?;
    info!("Synthetic future basis: {:?}", synthetic.basis());

    let condor = OptionsMultiOrderRequest::new("Iron Condor", "NIFTY", EXCHANGE_NSE_INDEX)
        .with_expiry_date(&expiry)
        .with_leg(OptionLeg::new("OTM10", OptionType::Ce, Action::Buy, 75))
        .with_leg(OptionLeg::new("OTM10", OptionType::Pe, Action::Buy, 75))
        .with_leg(OptionLeg::new("OTM5", OptionType::Ce, Action::Sell, 75))
        .with_leg(OptionLeg::new("OTM5", OptionType::Pe, Action::Sell, 75));
    let response = client.options_multi_order(&condor).await?;
    for leg in response.failed_legs() {
        info!("Leg failed: {}", leg);
    }

    Ok(())
}
