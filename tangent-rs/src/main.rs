use tangent_compute::numerical::{env::Environment, eval::Eval};
use tangent_compute::symbolic::simplify::{simplify_with_steps, RuleSet};
use tangent_compute::symbolic::{differentiate, Expr};

fn main() {
    let samples = [
        Expr::add(
            Expr::mul(Expr::variable("x"), Expr::variable("x")),
            Expr::variable("x"),
        ),
        Expr::div(Expr::variable("x"), Expr::variable("y")),
        Expr::mul(Expr::sin(Expr::variable("x")), Expr::variable("y")),
        Expr::cos(Expr::variable("x")),
        Expr::div(Expr::exp(Expr::variable("x")), Expr::variable("x")),
        Expr::mul(Expr::variable("pie"), Expr::variable("x")),
    ];

    let mut env = Environment::default();
    env.add_var("x", 2.0);
    env.add_var("y", 3.0);

    for sample in &samples {
        let mut names = sample.variables().into_iter().collect::<Vec<_>>();
        names.sort_unstable();

        let derivative = differentiate(sample, "x");
        println!("d/dx {sample}    (variables: {})", names.join(", "));
        println!("  = {derivative}");
        match derivative.eval(&env) {
            Ok(value) => println!("  = {value} at x = 2, y = 3"),
            Err(error) => {
                println!("  cannot evaluate: {error}");
                if let Some(help) = error.help() {
                    println!("  {help}");
                }
            },
        }
        println!();
    }

    let folded = Expr::div(
        Expr::add(Expr::constant(2.0), Expr::constant(4.0)),
        Expr::exp(Expr::constant(0.0)),
    );
    let (result, steps) = simplify_with_steps(&folded, RuleSet::Folding);
    println!("{folded} folds to {result} via {steps:?}");
}
