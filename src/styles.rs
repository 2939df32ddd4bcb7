use stylist::{css, StyleSource};

/// Site-wide stylesheet mounted once by `App` through `stylist::yew::Global`.
pub fn global_style() -> StyleSource {
    css!(
        r#"
        body {
            margin: 0;
            font-family: 'Inter', sans-serif;
            background-color: #f9fafb;
            color: #111827;
        }

        a {
            color: inherit;
        }

        .top-nav {
            position: sticky;
            top: 0;
            z-index: 50;
            background: #ffffff;
            border-bottom: 1px solid #f3f4f6;
            transition: box-shadow 0.2s ease;
        }

        .top-nav.scrolled {
            box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
        }

        .nav-content {
            max-width: 80rem;
            margin: 0 auto;
            padding: 1.25rem 1.5rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }

        .nav-logo {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            font-size: 1.5rem;
            font-weight: 800;
            color: #1e3a8a;
            text-decoration: none;
        }

        .nav-right {
            display: flex;
            gap: 2rem;
        }

        .nav-link {
            color: #374151;
            font-weight: 600;
            font-size: 0.875rem;
            text-decoration: none;
            padding-bottom: 0.25rem;
        }

        .nav-link.active {
            color: #1e3a8a;
            border-bottom: 2px solid #1e3a8a;
        }

        .burger-menu {
            display: none;
            background: none;
            border: none;
            cursor: pointer;
        }

        .burger-menu span {
            display: block;
            width: 24px;
            height: 2px;
            margin: 5px 0;
            background: #1e3a8a;
        }

        @media (max-width: 640px) {
            .burger-menu {
                display: block;
            }

            .nav-right {
                display: none;
            }

            .nav-right.mobile-menu-open {
                display: flex;
                flex-direction: column;
                position: absolute;
                top: 100%;
                left: 0;
                right: 0;
                padding: 1rem 1.5rem;
                background: #ffffff;
                box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08);
            }
        }

        .page-main {
            min-height: 70vh;
        }

        .page {
            max-width: 64rem;
            margin: 0 auto;
            padding: 5rem 1.5rem;
        }

        .page-header {
            text-align: center;
            margin-bottom: 4rem;
        }

        .page-header h1 {
            font-size: 3rem;
            font-weight: 800;
            color: #1e3a8a;
            letter-spacing: -0.025em;
        }

        .page-header p {
            font-size: 1.25rem;
            color: #374151;
            line-height: 1.6;
        }

        .panel {
            background: #ffffff;
            border: 1px solid #f3f4f6;
            border-radius: 1.5rem;
            padding: 3rem;
            box-shadow: 0 20px 40px rgba(17, 24, 39, 0.05);
        }

        .grid-3 {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 2rem;
        }

        @media (max-width: 768px) {
            .grid-3 {
                grid-template-columns: 1fr;
            }
        }

        .icon {
            display: inline-block;
            font-size: 1.5rem;
            color: #1e3a8a;
        }

        .icon.danger {
            color: #dc2626;
        }

        .cta-row {
            text-align: center;
            margin-top: 3rem;
        }

        .cta-button {
            display: inline-flex;
            align-items: center;
            gap: 1rem;
            padding: 1.25rem 2.5rem;
            border: none;
            border-radius: 0.75rem;
            background: #1e3a8a;
            color: #ffffff;
            font-size: 1.125rem;
            font-weight: 800;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            text-decoration: none;
            cursor: pointer;
            transition: transform 0.3s ease, background 0.3s ease;
        }

        .cta-button:hover {
            background: #1e40af;
            transform: translateY(-2px);
        }

        .cta-button:disabled {
            background: #e5e7eb;
            color: #9ca3af;
            cursor: not-allowed;
            transform: none;
        }

        .cta-button.secondary {
            background: #ffffff;
            color: #1e3a8a;
            border: 2px solid #1e3a8a;
        }

        .cta-note {
            font-size: 0.875rem;
            color: #6b7280;
            margin-top: 1rem;
        }

        .question-card {
            background: #ffffff;
            padding: 2rem;
            margin-bottom: 2rem;
            border: 1px solid #e5e7eb;
            border-radius: 1rem;
            box-shadow: 0 10px 25px rgba(17, 24, 39, 0.05);
        }

        .question-card.answered-yes {
            border-color: #059669;
            box-shadow: 0 0 0 3px #d1fae5;
        }

        .question-card.answered-no {
            border-color: #ef4444;
            box-shadow: 0 0 0 3px #fee2e2;
        }

        .question-number {
            color: #1e3a8a;
            font-weight: 800;
            margin-right: 0.5rem;
        }

        .question-category {
            font-size: 0.75rem;
            text-transform: uppercase;
            letter-spacing: 0.1em;
            color: #6b7280;
        }

        .regulation-note {
            font-family: monospace;
            font-size: 0.75rem;
            color: #6b7280;
            background: #f9fafb;
            border: 1px solid #f3f4f6;
            border-radius: 0.25rem;
            padding: 0.75rem;
        }

        .answer-buttons {
            display: flex;
            gap: 1rem;
            max-width: 32rem;
            margin: 0 auto;
        }

        .answer-button {
            flex: 1;
            padding: 0.75rem 2rem;
            border: 1px solid #d1d5db;
            border-radius: 0.5rem;
            background: #ffffff;
            color: #374151;
            font-weight: 700;
            cursor: pointer;
        }

        .answer-button.yes.selected {
            background: #059669;
            border-color: #059669;
            color: #ffffff;
        }

        .answer-button.no.selected {
            background: #dc2626;
            border-color: #dc2626;
            color: #ffffff;
        }

        .quiz-progress {
            text-align: center;
            color: #6b7280;
            margin-bottom: 2rem;
        }

        .verdict-banner {
            background: #f9fafb;
            border: 1px solid #e5e7eb;
            border-radius: 1rem;
            padding: 2rem;
            margin-bottom: 2rem;
        }

        .verdict-banner.compliant .verdict-line,
        .result-card.compliant .result-icon {
            color: #047857;
        }

        .verdict-banner.at-risk .verdict-line,
        .result-card.at-risk .result-icon {
            color: #b91c1c;
        }

        .verdict-line {
            font-size: 1.25rem;
            font-weight: 700;
        }

        .result-card {
            background: #f9fafb;
            border-radius: 1rem;
            padding: 3rem;
            text-align: center;
        }

        .result-card.compliant {
            border: 1px solid #34d399;
        }

        .result-card.at-risk {
            border: 1px solid #f87171;
        }

        .result-icon {
            font-size: 3rem;
        }

        .result-actions {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 1rem;
        }

        .not-found {
            text-align: center;
            padding: 8rem 1.5rem;
        }

        .not-found h1 {
            color: #dc2626;
        }

        .legal-content section {
            margin: 1.5rem 0;
        }

        .legal-content h2 {
            color: #1e3a8a;
        }

        .legal-content p,
        .legal-content li {
            color: #4b5563;
            line-height: 1.6;
        }

        .legal-links {
            margin-top: 2rem;
            text-align: center;
        }

        .site-footer {
            margin-top: 6rem;
            padding: 2.5rem 1.5rem;
            border-top: 1px solid #f3f4f6;
            background: #ffffff;
            text-align: center;
            font-size: 0.875rem;
            color: #6b7280;
        }

        .footer-link {
            margin-left: 1rem;
            color: #6b7280;
        }
    "#
    )
}
