use covenant_core::{tokens, Address, TOKEN_UNIT};
use token_sale::{SaleError, TokenSale};

#[test]
fn test_multiple_rounds_coexist() {
    let dao = Address::from("dao");
    let mut sale = TokenSale::new(Address::from("token-sale"), dao.clone());

    let cheap = sale
        .start_sale(&dao, tokens(1000), TOKEN_UNIT / 2, tokens(3000))
        .unwrap();
    let dear = sale
        .start_sale(&dao, tokens(2000), 2 * TOKEN_UNIT, tokens(3000))
        .unwrap();
    assert_eq!((cheap, dear), (1, 2));

    // Each purchase draws down only the targeted round
    sale.purchase(cheap, 100, 50 * TOKEN_UNIT).unwrap();
    assert_eq!(sale.round(cheap).unwrap().tokens_available, tokens(900));
    assert_eq!(sale.round(dear).unwrap().tokens_available, tokens(2000));

    // Prices are per-round
    let result = sale.purchase(dear, 100, 50 * TOKEN_UNIT);
    assert!(matches!(result, Err(SaleError::IncorrectPayment { .. })));
    sale.purchase(dear, 100, 200 * TOKEN_UNIT).unwrap();
}

#[test]
fn test_failed_purchase_leaves_round_unchanged() {
    let dao = Address::from("dao");
    let mut sale = TokenSale::new(Address::from("token-sale"), dao.clone());
    let id = sale
        .start_sale(&dao, tokens(50), TOKEN_UNIT, tokens(50))
        .unwrap();

    for (amount, value) in [(10, 9 * TOKEN_UNIT), (51, 51 * TOKEN_UNIT), (10, 0)] {
        assert!(sale.purchase(id, amount, value).is_err());
        let round = sale.round(id).unwrap();
        assert_eq!(round.tokens_available, tokens(50));
        assert!(round.active);
    }
}
