//! Global CSS styles for the storefront.
//!
//! Dark, warm, chilli-red accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CHAR (Backgrounds) */
  --char: #0f0d0c;
  --char-card: #181513;
  --char-raised: #221e1b;
  --char-border: #2e2824;

  /* CHILLI (Primary, Heat) */
  --chilli: #e63b2e;
  --chilli-hover: #f0554a;
  --chilli-glow: rgba(230, 59, 46, 0.25);

  /* EMBER (Headings, Badges) */
  --ember: #f2a541;
  --ember-glow: rgba(242, 165, 65, 0.2);

  /* TEXT */
  --text-primary: #f7f3ef;
  --text-muted: #a39e99;

  /* SEMANTIC */
  --destructive: #ff4d4f;

  /* Typography */
  --font-display: 'Bebas Neue', 'Oswald', Impact, sans-serif;
  --font-body: 'Inter', -apple-system, 'Segoe UI', sans-serif;

  --radius: 0.75rem;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--char);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-display);
  font-size: clamp(3rem, 8vw, 4.5rem);
  letter-spacing: 0.02em;
  line-height: 1.05;
}

.tagline {
  max-width: 42rem;
  margin: 1rem auto 0;
  font-size: 1.375rem;
  color: var(--text-muted);
}

.section-header {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 5vw, 3rem);
  letter-spacing: 0.02em;
  margin-bottom: 1rem;
}

.section-lede {
  font-size: 1.125rem;
  color: var(--text-muted);
  margin-bottom: 2rem;
}

.body-text {
  font-size: 1.125rem;
  color: var(--text-muted);
  line-height: 1.8;
  margin-bottom: 1.5rem;
}

/* === Layout === */
.hero {
  position: relative;
  display: flex;
  min-height: 100vh;
  align-items: center;
  justify-content: center;
  padding: 5rem 1rem;
  text-align: center;
}

.hero-glow {
  position: absolute;
  inset: 0;
  background: radial-gradient(circle at center, var(--chilli-glow), transparent 60%);
  opacity: 0.5;
  pointer-events: none;
}

.hero-content {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
}

.hero-logo {
  width: 100%;
  max-width: 28rem;
  filter: drop-shadow(0 20px 40px rgba(0, 0, 0, 0.6));
  transition: transform var(--transition-slow);
}

.hero-logo:hover {
  transform: scale(1.05);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.section {
  position: relative;
  padding: 6rem 1rem;
}

.section--bordered {
  border-top: 1px solid var(--char-border);
}

.section-inner {
  max-width: 56rem;
  margin: 0 auto;
  text-align: center;
}

.section-inner--wide {
  max-width: 80rem;
}

.section-heading {
  margin-bottom: 4rem;
}

.cta-panel {
  padding: 3rem;
  border: 1px solid rgba(230, 59, 46, 0.3);
  border-radius: 1rem;
  background: linear-gradient(135deg, var(--chilli-glow), transparent 70%);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.footer {
  padding: 2rem 1rem;
  border-top: 1px solid var(--char-border);
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Buttons === */
.btn-primary, .btn-outline {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.625rem 1.25rem;
  border-radius: var(--radius);
  font-family: var(--font-body);
  font-size: 1rem;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-primary {
  background: var(--chilli);
  color: var(--text-primary);
  border: 1px solid var(--chilli);
  box-shadow: 0 8px 20px var(--chilli-glow);
}

.btn-primary:hover:not(:disabled) {
  background: var(--chilli-hover);
  box-shadow: 0 12px 28px var(--chilli-glow);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: progress;
}

.btn-outline {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--chilli);
}

.btn-outline:hover {
  background: var(--chilli-glow);
}

.btn-lg {
  padding: 0.875rem 2rem;
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
}

.icon-btn:hover {
  color: var(--text-primary);
}

/* === Product Grid === */
.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: 2rem;
}

.product-card {
  overflow: hidden;
  border: 1px solid var(--char-border);
  border-radius: var(--radius);
  background: var(--char-card);
  transition: all var(--transition-slow);
  animation: fade-in-up 0.8s ease both;
}

.product-card:hover {
  border-color: var(--chilli);
  box-shadow: 0 25px 50px var(--chilli-glow);
}

.product-card-image {
  aspect-ratio: 1 / 1;
  overflow: hidden;
  background: linear-gradient(135deg, var(--chilli-glow), transparent);
}

.product-card-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 0.7s ease;
}

.product-card:hover .product-card-image img {
  transform: scale(1.1);
}

.product-card-body {
  padding: 1.5rem;
  text-align: center;
}

.product-card-name {
  font-size: 1.5rem;
  margin-bottom: 0.5rem;
}

.product-card-tagline {
  color: var(--text-muted);
  margin-bottom: 0.75rem;
}

/* === Heat === */
.heat-badge {
  display: inline-flex;
  padding: 0.25rem 1rem;
  border-radius: 999px;
  border: 1px solid rgba(230, 59, 46, 0.5);
  background: var(--chilli-glow);
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--chilli);
}

.heat-badge.heat--mild {
  color: var(--ember);
  border-color: rgba(242, 165, 65, 0.5);
  background: var(--ember-glow);
}

.heat-badge.heat--hot {
  box-shadow: 0 0 12px var(--chilli-glow);
}

.pepper-meter {
  font-size: 1.125rem;
}

/* === Dialog === */
.dialog-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.8);
  animation: fade-in var(--transition-fast) ease;
}

.dialog-content {
  width: min(32rem, calc(100vw - 2rem));
  max-height: 85vh;
  overflow-y: auto;
  overscroll-behavior: contain;
  padding: 1.5rem;
  border: 1px solid var(--char-border);
  border-radius: var(--radius);
  background: var(--char-card);
  outline: none;
}

.dialog-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
}

.dialog-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.dialog-description {
  margin-top: 0.25rem;
  color: var(--text-muted);
}

.dialog-body {
  margin-top: 1.5rem;
}

/* === Form === */
.order-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.form-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
  gap: 1.5rem;
}

.form-field, .form-section {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  font-size: 0.875rem;
  font-weight: 500;
}

.input-label--section {
  font-size: 1rem;
}

.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--char-border);
  border-radius: calc(var(--radius) - 0.25rem);
  background: var(--char-raised);
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: 1rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--chilli);
  box-shadow: 0 0 0 3px var(--chilli-glow);
}

.input-field--invalid {
  border-color: var(--destructive);
}

.input-field--qty {
  width: 5rem;
  background: var(--char);
}

.field-error {
  font-size: 0.875rem;
  color: var(--destructive);
}

.sauce-rows {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.sauce-row {
  display: flex;
  align-items: flex-start;
  gap: 1rem;
  padding: 1rem;
  border: 1px solid var(--char-border);
  border-radius: var(--radius);
  background: rgba(34, 30, 27, 0.5);
}

.sauce-row-image {
  width: 5rem;
  height: 5rem;
  flex-shrink: 0;
  border-radius: var(--radius);
  object-fit: cover;
}

.sauce-row-body {
  flex: 1;
  min-width: 0;
}

.sauce-row-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.25rem;
}

.sauce-row-description {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.quantity-input {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  flex-shrink: 0;
}

/* === Toasts === */
.toast-viewport {
  position: fixed;
  right: 1rem;
  bottom: 1rem;
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  width: min(24rem, calc(100vw - 2rem));
  list-style: none;
}

.toast {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
  padding: 1rem 1.25rem;
  border: 1px solid var(--char-border);
  border-radius: var(--radius);
  background: var(--char-raised);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
  animation: fade-in-up var(--transition-normal) ease;
}

.toast--destructive {
  border-color: var(--destructive);
  background: #3a1214;
}

.toast-title {
  font-weight: 600;
}

.toast-description {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Animation === */
.fade-in-up {
  animation: fade-in-up 0.8s ease both;
}

.delay-200 { animation-delay: 200ms; }
.delay-400 { animation-delay: 400ms; }

@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
